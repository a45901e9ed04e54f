use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};

struct Feature {
    icon: IconKind,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: IconKind::Play,
        title: "Every service, one login",
        text: "Watch across the major streaming platforms without juggling accounts or bills.",
    },
    Feature {
        icon: IconKind::Sparkles,
        title: "AI tools built in",
        text: "Writing, image and video assistants sit next to your watchlist, ready when inspiration hits.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Private by default",
        text: "Your viewing history and prompts stay yours. We never sell personal data.",
    },
    Feature {
        icon: IconKind::Award,
        title: "One fair price",
        text: "A single monthly plan that costs less than the subscriptions it replaces.",
    },
];

#[function_component(Info)]
pub fn info() -> Html {
    html! {
        <section id="info" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-white text-center mb-4">
                    { "Why one bundle?" }
                </h2>
                <p class="text-slate-400 text-center max-w-2xl mx-auto mb-12">
                    { "Entertainment and productivity finally live in the same place." }
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="bg-slate-800 p-6 rounded-xl">
                            <Icon kind={feature.icon} class="w-8 h-8 text-amber-500 mb-4" />
                            <h3 class="text-white text-lg font-semibold mb-2">{ feature.title }</h3>
                            <p class="text-slate-400">{ feature.text }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
