use yew::prelude::*;

use crate::animation::frame::Frame;
use crate::animation::motion::{Motion, Spring, Transition};
use crate::components::icons::Icon;
use crate::content::CERTIFICATIONS;

#[function_component(Certifications)]
pub fn certifications() -> Html {
    html! {
        <Motion
            class="mt-32 max-w-7xl mx-auto"
            initial={Frame::hidden(0.0)}
            transition={Transition::tween(0.8)}
        >
            <h2 class="text-3xl md:text-4xl font-bold text-white text-center mb-12">
                { "Our Achievements & Recognition" }
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for CERTIFICATIONS.iter().map(|cert| html! {
                    <Motion
                        key={cert.id}
                        class="certification-card bg-slate-800/50 backdrop-blur-sm p-6 rounded-xl border border-slate-700"
                        while_hover={Some(Frame::VISIBLE.with_scale(1.05))}
                        hover_transition={Transition::Spring(Spring::new(300.0))}
                    >
                        <div class="flex items-center justify-center mb-4">
                            <div class="w-16 h-16 rounded-full bg-amber-500/10 flex items-center justify-center">
                                <Icon kind={cert.icon} class="w-8 h-8 text-amber-500" />
                            </div>
                        </div>
                        <h3 class="text-xl font-semibold text-white text-center mb-2">{ cert.name }</h3>
                        <p class="text-slate-400 text-center mb-2">{ cert.issuer }</p>
                        <p class="text-amber-500 text-sm text-center">{ format!("Awarded {}", cert.year) }</p>
                    </Motion>
                }) }
            </div>
        </Motion>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_one_card_per_certification() {
        let html = ServerRenderer::<Certifications>::new().render().await;
        assert_eq!(html.matches("certification-card").count(), CERTIFICATIONS.len());
        assert!(html.contains("Our Achievements &amp; Recognition"));
        for cert in CERTIFICATIONS {
            assert_eq!(html.matches(cert.name).count(), 1);
        }
    }
}
