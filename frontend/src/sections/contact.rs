use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};

const CHANNELS: [(IconKind, &str, &str, &str); 3] = [
    (IconKind::Mail, "Email", "hello@streamline.example", "mailto:hello@streamline.example"),
    (IconKind::Phone, "Phone", "+1 (555) 010-2023", "tel:+15550102023"),
    (IconKind::MapPin, "Office", "San Francisco, CA", "https://maps.google.com/?q=San+Francisco"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-5xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">{ "Get in touch" }</h2>
                <p class="text-slate-400 mb-12">
                    { "Questions about plans, partnerships or press? We answer within one business day." }
                </p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for CHANNELS.iter().map(|(icon, label, value, href)| html! {
                        <a href={*href} class="block bg-slate-800 p-6 rounded-xl border border-slate-700 hover:border-amber-500">
                            <Icon kind={*icon} class="w-8 h-8 text-amber-500 mx-auto mb-4" />
                            <h3 class="text-white font-semibold mb-1">{ *label }</h3>
                            <p class="text-slate-400">{ *value }</p>
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}
