use yew::prelude::*;

const LINKS: [(&str, &str); 4] = [
    ("Home", "#home"),
    ("Reviews", "#reviews"),
    ("Why us", "#info"),
    ("Contact", "#contact"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="footer" class="border-t border-slate-800 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <a href="#home" class="text-white text-xl font-bold">{ "Streamline" }</a>
                <nav class="flex gap-6">
                    { for LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} class="text-slate-400 hover:text-amber-500">{ *label }</a>
                    }) }
                </nav>
                <p class="text-slate-500 text-sm">{ "\u{00A9} 2024 Streamline. All rights reserved." }</p>
            </div>
        </footer>
    }
}
