use log::{error, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::animation::binding::ScrollBinding;
use crate::animation::frame::Frame;
use crate::animation::motion::{Motion, Spring, Transition};
use crate::components::icons::{Icon, IconKind};
use crate::config::{RevealConfig, REVIEW_REVEAL};
use crate::content::{Review, FEATURED_QUOTE, MAX_RATING, REVIEWS};
use crate::sections::Certifications;

fn initial_frames() -> Vec<Frame> {
    match REVIEW_REVEAL.driver(REVIEWS.len()) {
        Ok(driver) => driver.frames(),
        Err(_) => vec![Frame::VISIBLE; REVIEWS.len()],
    }
}

/// Connects the section's scroll position to the card frames. Any failure
/// leaves the cards fully visible instead of stuck hidden.
fn attach_reveal(
    config: &RevealConfig,
    section: &NodeRef,
    on_frames: Callback<Vec<Frame>>,
) -> Option<ScrollBinding> {
    let show_all = || on_frames.emit(vec![Frame::VISIBLE; REVIEWS.len()]);

    let driver = match config.driver(REVIEWS.len()) {
        Ok(driver) => driver,
        Err(err) => {
            error!("review reveal disabled: {}", err);
            show_all();
            return None;
        }
    };
    let Some(element) = section.cast::<Element>() else {
        warn!("reviews section not mounted, skipping scroll reveal");
        show_all();
        return None;
    };
    let Some(window) = web_sys::window() else {
        warn!("no window, skipping scroll reveal");
        show_all();
        return None;
    };

    match ScrollBinding::attach(window, element, driver, on_frames.clone()) {
        Ok(binding) => Some(binding),
        Err(err) => {
            error!("failed to attach review scroll reveal: {:?}", err);
            show_all();
            None
        }
    }
}

#[derive(Properties, PartialEq)]
struct ReviewCardProps {
    review: Review,
    frame: Frame,
}

#[function_component(ReviewCard)]
fn review_card(props: &ReviewCardProps) -> Html {
    let review = &props.review;
    html! {
        <div class="review-card" style={props.frame.style()}>
            <Motion
                class="h-full bg-slate-800 p-6 rounded-xl hover:shadow-xl hover:shadow-slate-700/20"
                while_hover={Some(Frame::VISIBLE.with_y(-10.0))}
                hover_transition={Transition::Spring(Spring::new(500.0).with_damping(25.0))}
            >
                <div class="flex justify-between items-start mb-4">
                    <Icon kind={IconKind::QuoteLeft} class="w-6 h-6 text-slate-600" />
                    <div class="flex">
                        { for (0..review.rating.min(MAX_RATING)).map(|_| html! {
                            <Icon kind={IconKind::Star} class="w-4 h-4 text-amber-500" />
                        }) }
                    </div>
                </div>
                <p class="text-slate-300 mb-6">{ review.review }</p>
                <div class="flex items-center">
                    <div class="p-2 bg-slate-700 rounded-full">
                        <Icon kind={IconKind::UserTie} class="w-8 h-8 text-amber-500" />
                    </div>
                    <div class="ml-4">
                        <h3 class="text-white font-semibold">{ review.name }</h3>
                        <p class="text-slate-400 text-sm">
                            { format!("{} at {}", review.role, review.company) }
                        </p>
                    </div>
                </div>
            </Motion>
        </div>
    }
}

#[function_component(FeaturedQuoteBlock)]
fn featured_quote_block() -> Html {
    html! {
        <Motion
            class="featured-quote max-w-4xl mx-auto mb-20 p-8 bg-gradient-to-r from-amber-500/10 to-amber-600/10 rounded-2xl border border-amber-500/20 backdrop-blur-sm"
            initial={Frame { opacity: 0.0, y: 0.0, scale: 0.9 }}
            transition={Transition::tween(0.8).delayed(0.2)}
        >
            <Icon kind={IconKind::QuoteBlock} class="w-14 h-14 text-amber-500 mb-6" />
            <p class="text-2xl md:text-3xl text-amber-500 font-light italic mb-8">
                { format!("\u{201C}{}\u{201D}", FEATURED_QUOTE.quote) }
            </p>
            <div class="flex items-center justify-end">
                <div class="text-right">
                    <h3 class="text-white text-xl font-bold">{ FEATURED_QUOTE.author }</h3>
                    <p class="text-slate-400">{ FEATURED_QUOTE.title }</p>
                </div>
                <div class="ml-4 p-2 rounded-full">
                    <Icon kind={IconKind::UserTie} class="w-12 h-12 text-amber-500" />
                </div>
            </div>
        </Motion>
    }
}

/// Testimonials with a scroll-triggered staggered entrance, followed by the
/// certifications grid.
#[function_component(Reviews)]
pub fn reviews() -> Html {
    let section_ref = use_node_ref();
    let frames = use_state(initial_frames);

    {
        let section_ref = section_ref.clone();
        let frames = frames.setter();
        use_effect_with_deps(
            move |_| {
                let on_frames = Callback::from(move |next: Vec<Frame>| frames.set(next));
                let binding = attach_reveal(&REVIEW_REVEAL, &section_ref, on_frames);
                move || drop(binding)
            },
            (),
        );
    }

    html! {
        <section
            id="reviews"
            ref={section_ref}
            class="min-h-screen bg-slate-900 py-20 px-4 sm:px-6 lg:px-8"
        >
            <Motion
                class="text-center mb-20"
                initial={Frame::hidden(20.0)}
                transition={Transition::tween(0.8)}
            >
                <h1 class="text-4xl md:text-6xl font-bold text-white mb-6">
                    { "What Our Users Say" }
                </h1>
                <div class="w-24 h-1 bg-amber-500 mx-auto"></div>
            </Motion>

            <FeaturedQuoteBlock />

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto">
                { for REVIEWS.iter().enumerate().map(|(i, review)| html! {
                    <ReviewCard
                        key={review.id}
                        review={review.clone()}
                        frame={frames.get(i).copied().unwrap_or(Frame::VISIBLE)}
                    />
                }) }
            </div>

            <Certifications />
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::content::CERTIFICATIONS;
    use yew::ServerRenderer;

    const STAR: &str = r#"data-icon="star""#;

    async fn render() -> String {
        ServerRenderer::<Reviews>::new().render().await
    }

    // Text nodes may come back with apostrophes entity-escaped.
    fn contains_text(html: &str, text: &str) -> bool {
        html.contains(text)
            || html.contains(&text.replace('\'', "&#x27;"))
            || html.contains(&text.replace('\'', "&#39;"))
    }

    #[tokio::test]
    async fn each_card_has_rating_stars() {
        let html = render().await;
        let cards: Vec<&str> = html.split("review-card").skip(1).collect();
        assert_eq!(cards.len(), REVIEWS.len());
        for (card, review) in cards.iter().zip(REVIEWS) {
            assert_eq!(card.matches(STAR).count(), usize::from(review.rating));
        }
    }

    #[tokio::test]
    async fn every_field_is_rendered() {
        let html = render().await;
        for review in REVIEWS {
            assert!(contains_text(&html, review.name));
            assert!(contains_text(&html, review.review), "missing text of {}", review.name);
            assert!(html.contains(&format!("{} at {}", review.role, review.company)));
        }
        for cert in CERTIFICATIONS {
            assert!(html.contains(cert.name));
            assert!(html.contains(cert.issuer));
            assert!(html.contains(&format!("Awarded {}", cert.year)));
            assert!(html.contains(&format!(r#"data-icon="{}""#, cert.icon.name())));
        }
    }

    #[tokio::test]
    async fn cards_render_hidden_until_triggered() {
        let html = render().await;
        let hidden = Frame::hidden(100.0).style();
        assert_eq!(html.matches(&hidden).count(), REVIEWS.len());
    }

    #[tokio::test]
    async fn one_featured_quote() {
        let html = render().await;
        assert_eq!(html.matches("featured-quote").count(), 1);
        assert_eq!(html.matches(FEATURED_QUOTE.author).count(), 1);
        assert!(html.contains(FEATURED_QUOTE.title));
    }

    fn recording() -> (Rc<RefCell<Vec<Vec<Frame>>>>, Callback<Vec<Frame>>) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = emitted.clone();
        let callback = Callback::from(move |frames: Vec<Frame>| sink.borrow_mut().push(frames));
        (emitted, callback)
    }

    #[test]
    fn bad_reveal_config_shows_every_card() {
        let (emitted, on_frames) = recording();
        let broken = RevealConfig { ease: "bouncy", ..REVIEW_REVEAL };

        assert!(attach_reveal(&broken, &NodeRef::default(), on_frames).is_none());
        assert_eq!(*emitted.borrow(), vec![vec![Frame::VISIBLE; REVIEWS.len()]]);
    }

    #[test]
    fn unmounted_section_shows_every_card() {
        let (emitted, on_frames) = recording();

        assert!(attach_reveal(&REVIEW_REVEAL, &NodeRef::default(), on_frames).is_none());
        assert_eq!(*emitted.borrow(), vec![vec![Frame::VISIBLE; REVIEWS.len()]]);
    }
}
