use leptos::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-coins",
        title: "Earn Rewards",
        description: "Get $50 for every successful referral. The more friends join, the more you earn!",
    },
    Feature {
        icon: "fas fa-users",
        title: "Easy Sharing",
        description: "Share your unique referral link via email, social media, or any platform you prefer.",
    },
    Feature {
        icon: "fas fa-rocket",
        title: "Instant Tracking",
        description: "Track your referrals and rewards in real-time through your personalized dashboard.",
    },
    Feature {
        icon: "fas fa-shield-alt",
        title: "Secure System",
        description: "Your referrals and rewards are protected by our secure tracking system.",
    },
];

const PROGRAM_STATS: &[(&str, &str)] = &[
    ("10K+", "Active Users"),
    ("$500K", "Rewards Paid"),
    ("50K+", "Successful Referrals"),
    ("98%", "Satisfaction Rate"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = PROGRAM_STATS
        .iter()
        .map(|(number, label)| {
            view! {
                <div class="rounded-lg bg-surface-muted p-6 text-center">
                    <p class="text-3xl font-bold text-action-primary-bg">{*number}</p>
                    <p class="mt-1 text-sm text-fg-muted">{*label}</p>
                </div>
            }
        })
        .collect_view();

    let features = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <div class="h-full rounded-lg border border-border bg-surface-elevated p-6 shadow-sm">
                    <div class="mb-4 text-3xl text-action-primary-bg">
                        <i class=feature.icon aria-hidden="true"></i>
                    </div>
                    <h3 class="text-lg font-semibold text-fg">{feature.title}</h3>
                    <p class="mt-2 text-sm text-fg-muted">{feature.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-surface">
            <div class="bg-action-primary-bg text-action-primary-text">
                <div class="max-w-7xl mx-auto py-16 px-4 sm:px-6 lg:px-8 text-center lg:text-left">
                    <h1 class="text-4xl font-extrabold sm:text-5xl lg:text-6xl">
                        "Share & Earn"
                    </h1>
                    <p class="mt-4 max-w-2xl text-lg opacity-90 mx-auto lg:mx-0">
                        "Join our referral program and earn rewards for every friend you bring on board."
                    </p>
                    <div class="mt-8 flex flex-col sm:flex-row gap-3 justify-center lg:justify-start">
                        <a
                            href="/signup"
                            class="inline-flex items-center justify-center px-8 py-3 rounded-md text-base font-medium bg-surface-elevated text-action-primary-bg hover:bg-surface-muted"
                        >
                            "Get Started"
                        </a>
                        <a
                            href="/login"
                            class="inline-flex items-center justify-center px-8 py-3 rounded-md text-base font-medium border border-action-primary-text hover:bg-action-primary-bg-hover"
                        >
                            "Login"
                        </a>
                    </div>
                </div>
            </div>

            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">{stats}</div>
            </div>

            <div class="max-w-7xl mx-auto pb-12 px-4 sm:px-6 lg:px-8">
                <h2 class="text-center text-3xl font-bold text-fg">
                    "Why Choose Our Referral Program?"
                </h2>
                <p class="mt-2 text-center text-fg-muted">
                    "Discover the benefits of our easy-to-use referral system"
                </p>
                <div class="mt-10 grid gap-6 md:grid-cols-2">{features}</div>
            </div>

            <div class="bg-action-primary-bg-hover text-action-primary-text">
                <div class="max-w-7xl mx-auto py-16 px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl font-bold">"Ready to Start Earning?"</h2>
                    <p class="mt-3 opacity-90">
                        "Join thousands of users who are already earning rewards through our referral program."
                    </p>
                    <a
                        href="/signup"
                        class="mt-8 inline-flex items-center justify-center px-8 py-3 rounded-md text-base font-medium bg-surface-elevated text-action-primary-bg hover:bg-surface-muted"
                    >
                        "Sign Up Now"
                    </a>
                </div>
            </div>
        </div>
    }
}
