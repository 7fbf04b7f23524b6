//! The slides of the talk.

use crate::slideshow::{Alignment, Deck, DeckBuilder};
use crate::theme::Region;

pub const DECK_TITLE: &str = "Design patterns in CardApp";

const BUILDER_CODE: &str = r#"let card = CardBuilder::new("Visa")
    .number("4242 4242 4242 4242")
    .holder("Ferris")
    .expires(12, 2030)
    .build()?;"#;

const OBSERVER_CODE: &str = r"wallet.subscribe(|event| match event {
    WalletEvent::Added(card) => list.insert(card),
    WalletEvent::Removed(id) => list.remove(id),
});";

const STRATEGY_CODE: &str = r"trait Payment {
    fn pay(&self, amount: Cents) -> Receipt;
}

let method: Box<dyn Payment> = match card.kind {
    Kind::Credit => Box::new(Credit::new(card)),
    Kind::Debit => Box::new(Debit::new(card)),
};";

const COUNTER_CODE: &str = r#"let mut count = 0;
button.on_press(|| count += 1);
label.set_text(format!("Press me - {count}"));"#;

/// Build the CardApp deck.
#[must_use]
pub fn cardapp_deck() -> Deck {
    DeckBuilder::new(DECK_TITLE)
        .slide(|s| s.title(DECK_TITLE))
        .slide(|s| {
            s.title("What is CardApp?")
                .bullets([
                    "A wallet for loyalty and payment cards",
                    "One screen per card, one list of cards",
                    "Small codebase, lots of small decisions",
                    "Today: the patterns that kept it small",
                ])
                .comment("Introduce yourself first.")
        })
        .slide(|s| {
            s.title("Builder")
                .subtitle("Composing a card step by step")
                .highlighted_code("rust", BUILDER_CODE, [2, 3])
        })
        .slide(|s| {
            s.title("Observer")
                .paragraph(
                    "The card list never asks the wallet what changed: the \
                     wallet tells every subscriber, and each one updates \
                     itself.",
                )
                .code("rust", OBSERVER_CODE)
        })
        .slide(|s| {
            s.title("Strategy")
                .bullets([
                    "Every card kind pays differently",
                    "The checkout only knows the trait",
                    "New kinds do not touch the checkout",
                ])
                .highlighted_code("rust", STRATEGY_CODE, [1, 2, 3])
                .comment("Mention the gift card kind added last month.")
        })
        .slide(|s| {
            s.title("Theme as a value")
                .paragraph(
                    "Colors and fonts are a plain record built once at \
                     startup and passed down, never a global.",
                )
                .raw(
                    Region::Code,
                    [
                        "background  #161821",
                        "title       #FFCC00  Avenir Next 64 bold",
                        "body        #F2F2F7  Avenir Next 32",
                        "code        #BF5AF2  Menlo 26",
                    ],
                )
        })
        .slide(|s| {
            s.title("Press me")
                .subtitle("The smallest possible state")
                .code("rust", COUNTER_CODE)
                .align(Alignment::Center)
                .comment("Press Enter a few times to show the counter.")
        })
        .slide(|s| {
            s.title("Thanks!")
                .subtitle("Questions?")
                .align(Alignment::Center)
        })
        .build()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::slideshow::Content;

    #[test]
    fn test_structure() {
        let deck = cardapp_deck();
        assert_eq!(deck.title(), DECK_TITLE);
        let counts: Vec<usize> =
            deck.slides().iter().map(|s| s.content().len()).collect();
        assert_eq!(counts, vec![1, 2, 3, 3, 3, 3, 3, 2]);
    }

    #[test]
    fn test_first_slide_is_only_the_title() {
        let deck = cardapp_deck();
        assert_eq!(
            deck.slides()[0].content(),
            &[Content::Title("Design patterns in CardApp".to_owned())]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let deck = cardapp_deck();
        let strategy = &deck.slides()[4];
        assert!(matches!(
            strategy.content(),
            [
                Content::Title(t),
                Content::BulletList(items),
                Content::CodeBlock { language, highlighted, .. },
            ] if t == "Strategy"
                && items.len() == 3
                && language == "rust"
                && highlighted == &vec![1, 2, 3]
        ));
    }

    #[test]
    fn test_every_slide_starts_with_a_title() {
        for slide in cardapp_deck().slides() {
            assert!(matches!(slide.content().first(), Some(Content::Title(_))));
        }
    }

    #[test]
    fn test_alignment_and_comments() {
        let deck = cardapp_deck();
        let aligned: Vec<Option<Alignment>> =
            deck.slides().iter().map(|s| s.alignment()).collect();
        assert_eq!(aligned[6], Some(Alignment::Center));
        assert_eq!(aligned[7], Some(Alignment::Center));
        assert!(aligned[..6].iter().all(Option::is_none));

        let comments =
            deck.slides().iter().filter(|s| s.comment().is_some()).count();
        assert_eq!(comments, 3);
    }

    #[test]
    fn test_built_twice_is_identical() {
        assert_eq!(cardapp_deck(), cardapp_deck());
    }
}
