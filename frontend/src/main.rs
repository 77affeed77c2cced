use wasm_bindgen_futures::spawn_local;

mod api;
mod components;
mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
mod utils;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting Share & Earn frontend");

    spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
    });

    router::mount_app();
}
