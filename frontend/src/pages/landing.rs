use yew::prelude::*;

use crate::sections::{Contact, Footer, Home, Info, Reviews};

/// The whole marketing page: every section in order on a dark full-bleed
/// background.
#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="bg-slate-900">
            <br />
            <Home />
            <Reviews />
            <Info />
            <Contact />
            <Footer />
        </div>
    }
}
