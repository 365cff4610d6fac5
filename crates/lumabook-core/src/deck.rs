//! Static picture-book page data.

/// Reference to one page image. Resolution of `source` to real pixels is a
/// host concern; the core only carries the strings through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImageRef<'a> {
    pub source: &'a str,
    pub alt_text: &'a str,
}

impl<'a> ImageRef<'a> {
    pub const fn new(source: &'a str, alt_text: &'a str) -> Self {
        Self { source, alt_text }
    }
}

/// Two-page unit shown as one slide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Spread<'a> {
    pub left: ImageRef<'a>,
    pub right: ImageRef<'a>,
}

/// Deck construction failures. The deck is the only fallible surface in the
/// core; everything downstream assumes a validated deck.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeckError {
    /// The spread sequence is empty.
    NoSpreads,
    /// An image reference has an empty source string.
    MissingImageSource,
}

/// Immutable compiled-in book: cover slide, spread slides in reading order,
/// ending slide.
#[derive(Clone, Copy, Debug)]
pub struct PageDeck<'a> {
    cover: ImageRef<'a>,
    spreads: &'a [Spread<'a>],
    ending: ImageRef<'a>,
}

impl<'a> PageDeck<'a> {
    pub fn new(
        cover: ImageRef<'a>,
        spreads: &'a [Spread<'a>],
        ending: ImageRef<'a>,
    ) -> Result<Self, DeckError> {
        if spreads.is_empty() {
            return Err(DeckError::NoSpreads);
        }

        if cover.source.is_empty() || ending.source.is_empty() {
            return Err(DeckError::MissingImageSource);
        }
        for spread in spreads {
            if spread.left.source.is_empty() || spread.right.source.is_empty() {
                return Err(DeckError::MissingImageSource);
            }
        }

        Ok(Self {
            cover,
            spreads,
            ending,
        })
    }

    /// Cover + one slide per spread + ending.
    pub fn total_slides(&self) -> u16 {
        let spread_slides = self.spreads.len().min((u16::MAX - 2) as usize) as u16;
        spread_slides + 2
    }

    pub fn last_slide(&self) -> u16 {
        self.total_slides() - 1
    }

    /// Slide lookup by index: `0` is the cover, `1..=spreads` are spreads,
    /// anything past that resolves to the ending. Total on purpose so the
    /// view path never has to handle a missing slide.
    pub fn slide_at(&self, index: u16) -> SlideContent<'a> {
        if index == 0 {
            return SlideContent::Cover { image: self.cover };
        }

        match self.spreads.get(index as usize - 1) {
            Some(spread) => SlideContent::Spread {
                left: spread.left,
                right: spread.right,
            },
            None => SlideContent::Ending { image: self.ending },
        }
    }
}

/// Resolved content of one slide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlideContent<'a> {
    Cover { image: ImageRef<'a> },
    Spread { left: ImageRef<'a>, right: ImageRef<'a> },
    Ending { image: ImageRef<'a> },
}

pub const LUMA_TITLE: &str = "Luma & her trip to the earth";

pub const LUMA_COVER: ImageRef<'static> =
    ImageRef::new("images/book-cover-new.png", "Portada - Luma & Her Trip to Earth");

pub const LUMA_SPREADS: [Spread<'static>; 4] = [
    Spread {
        left: ImageRef::new("images/book-cover.png", "Luma se presenta"),
        right: ImageRef::new("images/page-1.png", "Luma interfiere con satélite"),
    },
    Spread {
        left: ImageRef::new("images/page-2.png", "Luma se dirige a la Tierra"),
        right: ImageRef::new("images/page-3.png", "Efectos del GPS"),
    },
    Spread {
        left: ImageRef::new("images/page-4.png", "Apagones y auroras"),
        right: ImageRef::new("images/page-5.png", "Atlas lee sobre Luma"),
    },
    Spread {
        left: ImageRef::new("images/page-6.png", "Atlas aprende más"),
        right: ImageRef::new("images/page-7.png", "Fin del viaje de Luma"),
    },
];

pub const LUMA_ENDING: ImageRef<'static> = ImageRef::new(
    "images/book-ending.png",
    "Contraportada - An Interessan story for young readers",
);

/// Credits shown under the book, column by column.
pub const LUMA_REFERENCES: [&[&str]; 3] = [
    &["Esmeraldas", "Ecuador"],
    &["ATLAS-EC", "Nasa challenge 2025", "Spacial Weather"],
    &[
        "Dominique Grob",
        "Marina Aguilar",
        "Emiliano Salvador",
        "Gianni Casanova",
        "Gerardo Polo",
    ],
];

/// The compiled-in Luma book. Skips `new` validation; the const data above
/// is exercised by tests.
pub fn default_luma_deck() -> PageDeck<'static> {
    PageDeck {
        cover: LUMA_COVER,
        spreads: &LUMA_SPREADS,
        ending: LUMA_ENDING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_deck_has_six_slides() {
        let deck = default_luma_deck();
        assert_eq!(deck.total_slides(), 6);
        assert_eq!(deck.last_slide(), 5);
    }

    #[test]
    fn slide_lookup_maps_cover_spreads_ending() {
        let deck = default_luma_deck();
        assert!(matches!(deck.slide_at(0), SlideContent::Cover { .. }));
        for index in 1..=4 {
            assert!(matches!(deck.slide_at(index), SlideContent::Spread { .. }));
        }
        assert!(matches!(deck.slide_at(5), SlideContent::Ending { .. }));
        // Out-of-range clamps to the ending rather than panicking.
        assert!(matches!(deck.slide_at(60), SlideContent::Ending { .. }));
    }

    #[test]
    fn luma_deck_passes_validation() {
        assert!(PageDeck::new(LUMA_COVER, &LUMA_SPREADS, LUMA_ENDING).is_ok());
    }

    #[test]
    fn empty_spread_list_is_rejected() {
        let result = PageDeck::new(LUMA_COVER, &[], LUMA_ENDING);
        assert_eq!(result.unwrap_err(), DeckError::NoSpreads);
    }

    #[test]
    fn empty_image_source_is_rejected() {
        let spreads = [Spread {
            left: ImageRef::new("", "left"),
            right: ImageRef::new("images/page-1.png", "right"),
        }];
        let result = PageDeck::new(LUMA_COVER, &spreads, LUMA_ENDING);
        assert_eq!(result.unwrap_err(), DeckError::MissingImageSource);
    }
}
