use yew::prelude::*;

use crate::animation::frame::Frame;
use crate::animation::motion::{Motion, Transition};
use crate::components::icons::{Icon, IconKind};

const STATS: [(&str, &str); 3] = [
    ("10K+", "Titles streaming"),
    ("25", "AI tools included"),
    ("4.9", "Average rating"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <header id="home" class="relative min-h-[80vh] flex items-center justify-center px-4 sm:px-6 lg:px-8">
            <Motion
                class="max-w-4xl mx-auto text-center"
                initial={Frame::hidden(20.0)}
                transition={Transition::tween(0.8)}
            >
                <p class="inline-flex items-center gap-2 text-amber-500 text-sm font-semibold uppercase tracking-widest mb-6">
                    <Icon kind={IconKind::Sparkles} class="w-4 h-4" />
                    { "Streaming meets AI" }
                </p>
                <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">
                    { "Stream Everything. Create Anything." }
                </h1>
                <p class="text-xl text-slate-400 mb-10">
                    { "Premium streaming services and the AI tools you already use, bundled into one subscription." }
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a href="#contact" class="inline-flex items-center justify-center gap-2 px-8 py-3 rounded-full bg-amber-500 text-slate-900 font-semibold hover:bg-amber-400">
                        <Icon kind={IconKind::Play} class="w-5 h-5" />
                        { "Get Started" }
                    </a>
                    <a href="#reviews" class="px-8 py-3 rounded-full border border-slate-600 text-white hover:border-amber-500">
                        { "See what users say" }
                    </a>
                </div>
                <dl class="grid grid-cols-3 gap-6 mt-16">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div>
                            <dt class="text-3xl font-bold text-white">{ *value }</dt>
                            <dd class="text-slate-400 text-sm">{ *label }</dd>
                        </div>
                    }) }
                </dl>
            </Motion>
        </header>
    }
}
