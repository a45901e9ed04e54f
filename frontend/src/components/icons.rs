use yew::prelude::*;

/// Inline SVG glyphs used across the landing sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Star,
    QuoteLeft,
    QuoteBlock,
    UserTie,
    Crown,
    Shield,
    Award,
    Play,
    Sparkles,
    Mail,
    Phone,
    MapPin,
}

impl IconKind {
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Star => "star",
            IconKind::QuoteLeft => "quote-left",
            IconKind::QuoteBlock => "quote-block",
            IconKind::UserTie => "user-tie",
            IconKind::Crown => "crown",
            IconKind::Shield => "shield",
            IconKind::Award => "award",
            IconKind::Play => "play",
            IconKind::Sparkles => "sparkles",
            IconKind::Mail => "mail",
            IconKind::Phone => "phone",
            IconKind::MapPin => "map-pin",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            IconKind::Star => "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            IconKind::QuoteLeft => "M3 11a5 5 0 0 1 5-5h1v3H8a2 2 0 0 0-2 2h3v7H3v-7zm11 0a5 5 0 0 1 5-5h1v3h-1a2 2 0 0 0-2 2h3v7h-6v-7z",
            IconKind::QuoteBlock => "M2 12.5C2 8.36 4.9 5 9 4.5V7.6c-2 .5-3.2 2-3.4 3.9H9V19H2v-6.5zm12 0c0-4.14 2.9-7.5 7-8V7.6c-2 .5-3.2 2-3.4 3.9H21V19h-7v-6.5z",
            IconKind::UserTie => "M12 2a5 5 0 1 0 0 10 5 5 0 0 0 0-10zM4 22c0-4.2 3.1-7.6 7.1-8l-1.1 2.2L12 21l2-4.8-1.1-2.2c4 .4 7.1 3.8 7.1 8H4z",
            IconKind::Crown => "M2 7l5 4 5-7 5 7 5-4-2 11H4L2 7zm2 13h16v2H4v-2z",
            IconKind::Shield => "M12 2l8 3v6c0 5.25-3.4 9.74-8 11-4.6-1.26-8-5.75-8-11V5l8-3zm-1 13.2l5.6-5.6-1.4-1.4-4.2 4.2-2.1-2.1-1.4 1.4 3.5 3.5z",
            IconKind::Award => "M12 2a7 7 0 1 0 0 14 7 7 0 0 0 0-14zm0 3.5l1.2 2.4 2.6.4-1.9 1.8.5 2.6L12 11.5l-2.4 1.2.5-2.6-1.9-1.8 2.6-.4L12 5.5zM7.5 16.6L6 23l6-3 6 3-1.5-6.4A9 9 0 0 1 12 18a9 9 0 0 1-4.5-1.4z",
            IconKind::Play => "M8 5v14l11-7L8 5z",
            IconKind::Sparkles => "M10 2l1.8 5.2L17 9l-5.2 1.8L10 16l-1.8-5.2L3 9l5.2-1.8L10 2zm8 10l.9 2.1L21 15l-2.1.9L18 18l-.9-2.1L15 15l2.1-.9L18 12z",
            IconKind::Mail => "M3 5h18a1 1 0 0 1 1 1v12a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1zm1 2.4V17h16V7.4l-8 5.3-8-5.3zM5.2 7L12 11.5 18.8 7H5.2z",
            IconKind::Phone => "M6.6 10.8a15.1 15.1 0 0 0 6.6 6.6l2.2-2.2a1 1 0 0 1 1-.25 11.4 11.4 0 0 0 3.6.57 1 1 0 0 1 1 1V20a1 1 0 0 1-1 1A17 17 0 0 1 3 4a1 1 0 0 1 1-1h3.5a1 1 0 0 1 1 1c0 1.25.2 2.45.57 3.57a1 1 0 0 1-.25 1L6.6 10.8z",
            IconKind::MapPin => "M12 2a7 7 0 0 0-7 7c0 5.25 7 13 7 13s7-7.75 7-13a7 7 0 0 0-7-7zm0 9.5a2.5 2.5 0 1 1 0-5 2.5 2.5 0 0 1 0 5z",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            data-icon={props.kind.name()}
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d={props.kind.path()} />
        </svg>
    }
}
