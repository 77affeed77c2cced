use wasm_bindgen_futures::JsFuture;

use crate::utils::storage::window;

pub async fn copy_text(text: &str) -> Result<(), String> {
    let clipboard = window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|_| "Failed to copy to clipboard".to_string())?;
    Ok(())
}
