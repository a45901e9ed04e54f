use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-slate-900 flex flex-col items-center justify-center gap-6">
            <h1 class="text-4xl font-bold text-white">{ "Page not found" }</h1>
            <Link<Route> to={Route::Home} classes="text-amber-500 hover:text-amber-400">
                { "Back to the home page" }
            </Link<Route>>
        </div>
    }
}
