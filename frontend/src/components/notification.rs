use gloo_timers::callback::Timeout;
use leptos::*;

/// How long a notice stays on screen before it dismisses itself.
pub const NOTIFICATION_DISMISS_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub sequence: u64,
}

/// Single-slot notification state shared through context. A new notice
/// replaces the current one; the sequence number lets a delayed dismissal
/// tell whether its notice is still the one on screen.
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notice>>,
    next_sequence: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_sequence: create_rw_signal(0),
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }

    pub fn notify(&self, severity: Severity, message: impl Into<String>) -> u64 {
        let sequence = self.next_sequence.get_untracked();
        self.next_sequence.set(sequence + 1);
        self.current.set(Some(Notice {
            message: message.into(),
            severity,
            sequence,
        }));
        sequence
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(Severity::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(Severity::Success, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.notify(Severity::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(Severity::Error, message)
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// Clears the notice only if it is still the one issued under `sequence`.
    pub fn dismiss_if_current(&self, sequence: u64) {
        self.current.update(|current| {
            if current.as_ref().map(|notice| notice.sequence) == Some(sequence) {
                *current = None;
            }
        });
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| {
        let notifier = Notifier::new();
        provide_context(notifier);
        notifier
    })
}

#[component]
pub fn Toast() -> impl IntoView {
    let notifier = use_notifier();

    create_effect(move |_| {
        if let Some(notice) = notifier.current() {
            let sequence = notice.sequence;
            Timeout::new(NOTIFICATION_DISMISS_MS, move || {
                notifier.dismiss_if_current(sequence);
            })
            .forget();
        }
    });

    let severity = move || {
        notifier
            .current()
            .map(|notice| notice.severity)
            .unwrap_or(Severity::Info)
    };

    view! {
        <Show when=move || notifier.current().is_some() fallback=|| ()>
            <div class="fixed top-4 right-4 z-[80] w-full max-w-sm" role="status" aria-live="polite">
                <div class=move || banner_class(severity())>
                    <div class="flex items-start">
                        <div class="flex-shrink-0">
                            <i class=move || icon_class(severity())></i>
                        </div>
                        <p class="ml-3 flex-1 text-sm">
                            {move || notifier.current().map(|notice| notice.message).unwrap_or_default()}
                        </p>
                        <button
                            type="button"
                            aria-label="Dismiss"
                            class="ml-3 text-sm font-semibold opacity-70 hover:opacity-100"
                            on:click=move |_| notifier.dismiss()
                        >
                            {"✕"}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn banner_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => {
            "bg-status-info-bg border border-status-info-border text-status-info-text px-4 py-3 rounded shadow-lg"
        }
        Severity::Success => {
            "bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded shadow-lg"
        }
        Severity::Warning => {
            "bg-status-warning-bg border border-status-warning-border text-status-warning-text px-4 py-3 rounded shadow-lg"
        }
        Severity::Error => {
            "bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded shadow-lg"
        }
    }
}

fn icon_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "fas fa-info-circle",
        Severity::Success => "fas fa-check-circle",
        Severity::Warning => "fas fa-exclamation-triangle",
        Severity::Error => "fas fa-exclamation-circle",
    }
}
