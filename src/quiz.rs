//! # Quiz Engine
//!
//! Builds and grades the two question variants over a snapshot of a user's
//! cards. Everything here is a pure function of the snapshot plus the RNG
//! passed in: no internal state, nothing persisted. Session bookkeeping
//! (which question is pending for which user) belongs to the caller.
//!
//! Both variants need 1 target plus 2 distractors drawn from distinct
//! cards, hence the hard minimum of 3 cards.
//!
//! Grading is always by index, never by option text. Two cards may
//! legitimately share a caption; the duplicate stays a valid (wrong)
//! option and the question is still unambiguous.

use crate::error::{CardError, Result};
use crate::model::Card;
use rand::seq::SliceRandom;
use rand::Rng;

/// Hard minimum collection size for either quiz variant.
pub const MIN_QUIZ_CARDS: usize = 3;

const OPTION_COUNT: usize = 3;

/// "Guess the caption": show one image, offer three captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionQuestion {
    pub image_ref: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// "Guess the image": show one caption, offer three images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageQuestion {
    pub caption: String,
    pub images: Vec<String>,
    pub correct_index: usize,
}

impl CaptionQuestion {
    /// True iff `submitted_index` names the correct option.
    ///
    /// The submitted index arrives via a user-controlled callback payload,
    /// so an out-of-range value is rejected rather than trusted.
    pub fn check(&self, submitted_index: usize) -> Result<bool> {
        check_index(submitted_index, self.options.len(), self.correct_index)
    }
}

impl ImageQuestion {
    pub fn check(&self, submitted_index: usize) -> Result<bool> {
        check_index(submitted_index, self.images.len(), self.correct_index)
    }
}

fn check_index(submitted: usize, options: usize, correct: usize) -> Result<bool> {
    if submitted >= options {
        return Err(CardError::InvalidSelection {
            index: submitted,
            options,
        });
    }
    Ok(submitted == correct)
}

/// Build a "guess the caption" question: one random target card, two
/// caption distractors from distinct other cards, options shuffled.
pub fn caption_question<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Result<CaptionQuestion> {
    ensure_enough(cards)?;

    let target = rng.gen_range(0..cards.len());
    let mut pool: Vec<usize> = (0..cards.len()).filter(|&i| i != target).collect();
    pool.shuffle(rng);

    // Slot 0 is the target; shuffle the slots and note where it lands.
    let picked = [target, pool[0], pool[1]];
    let mut slots: Vec<usize> = (0..OPTION_COUNT).collect();
    slots.shuffle(rng);

    let mut options = Vec::with_capacity(OPTION_COUNT);
    let mut correct_index = 0;
    for (at, &slot) in slots.iter().enumerate() {
        if slot == 0 {
            correct_index = at;
        }
        options.push(cards[picked[slot]].caption.clone());
    }

    Ok(CaptionQuestion {
        image_ref: cards[target].image_ref.clone(),
        options,
        correct_index,
    })
}

/// Build a "guess the image" question: three distinct random cards, one of
/// which (chosen uniformly) supplies the caption prompt.
pub fn image_question<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Result<ImageQuestion> {
    ensure_enough(cards)?;

    let picked: Vec<&Card> = cards.choose_multiple(rng, OPTION_COUNT).collect();
    let correct_index = rng.gen_range(0..OPTION_COUNT);

    Ok(ImageQuestion {
        caption: picked[correct_index].caption.clone(),
        images: picked.iter().map(|c| c.image_ref.clone()).collect(),
        correct_index,
    })
}

fn ensure_enough(cards: &[Card]) -> Result<()> {
    if cards.len() < MIN_QUIZ_CARDS {
        return Err(CardError::InsufficientCards { have: cards.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn menagerie() -> Vec<Card> {
        vec![
            Card::new("imgA", "cat"),
            Card::new("imgB", "dog"),
            Card::new("imgC", "bird"),
        ]
    }

    #[test]
    fn too_few_cards_is_an_error() {
        let cards = vec![Card::new("imgA", "cat"), Card::new("imgB", "dog")];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            caption_question(&cards, &mut rng),
            Err(CardError::InsufficientCards { have: 2 })
        ));
        assert!(matches!(
            image_question(&cards, &mut rng),
            Err(CardError::InsufficientCards { have: 2 })
        ));
    }

    #[test]
    fn caption_question_uses_every_caption_once_for_three_cards() {
        // With exactly 3 cards the options must be {cat, dog, bird} in
        // some order, every time.
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = caption_question(&menagerie(), &mut rng).unwrap();

            assert_eq!(q.options.len(), 3);
            let got: BTreeSet<&str> = q.options.iter().map(String::as_str).collect();
            let want: BTreeSet<&str> = ["cat", "dog", "bird"].into();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn caption_question_correct_index_names_the_target() {
        let cards = menagerie();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = caption_question(&cards, &mut rng).unwrap();

            let target = cards
                .iter()
                .find(|c| c.image_ref == q.image_ref)
                .expect("image comes from the collection");
            assert_eq!(q.options[q.correct_index], target.caption);
        }
    }

    #[test]
    fn caption_question_grades_by_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = caption_question(&menagerie(), &mut rng).unwrap();

        assert!(q.check(q.correct_index).unwrap());
        for wrong in (0..3).filter(|&i| i != q.correct_index) {
            assert!(!q.check(wrong).unwrap());
        }
    }

    #[test]
    fn duplicate_captions_stay_unambiguous() {
        // Two cards captioned "cat": the duplicate remains a valid wrong
        // option, and the target is still identified by index.
        let cards = vec![
            Card::new("imgA", "cat"),
            Card::new("imgB", "cat"),
            Card::new("imgC", "dog"),
        ];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = caption_question(&cards, &mut rng).unwrap();

            assert_eq!(q.options.len(), 3);
            assert!(q.check(q.correct_index).unwrap());
            let target = cards.iter().find(|c| c.image_ref == q.image_ref).unwrap();
            assert_eq!(q.options[q.correct_index], target.caption);
        }
    }

    #[test]
    fn image_question_picks_three_distinct_cards() {
        let cards = vec![
            Card::new("imgA", "cat"),
            Card::new("imgB", "dog"),
            Card::new("imgC", "bird"),
            Card::new("imgD", "fish"),
            Card::new("imgE", "horse"),
        ];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = image_question(&cards, &mut rng).unwrap();

            assert_eq!(q.images.len(), 3);
            let distinct: BTreeSet<&str> = q.images.iter().map(String::as_str).collect();
            assert_eq!(distinct.len(), 3, "images must come from distinct cards");
            for image in &q.images {
                assert!(cards.iter().any(|c| &c.image_ref == image));
            }
        }
    }

    #[test]
    fn image_question_caption_matches_the_correct_image() {
        let cards = menagerie();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = image_question(&cards, &mut rng).unwrap();

            let correct_card = cards
                .iter()
                .find(|c| c.image_ref == q.images[q.correct_index])
                .expect("correct image comes from the collection");
            assert_eq!(q.caption, correct_card.caption);
        }
    }

    #[test]
    fn image_question_correct_index_is_not_pinned_to_zero() {
        // The answer slot must actually vary with the sampling.
        let cards = menagerie();
        let seen: BTreeSet<usize> = (0..100)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                image_question(&cards, &mut rng).unwrap().correct_index
            })
            .collect();
        assert_eq!(seen, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn caption_question_correct_index_is_not_pinned_to_zero() {
        let cards = menagerie();
        let seen: BTreeSet<usize> = (0..100)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                caption_question(&cards, &mut rng).unwrap().correct_index
            })
            .collect();
        assert_eq!(seen, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = caption_question(&menagerie(), &mut rng).unwrap();
        assert!(matches!(
            q.check(3),
            Err(CardError::InvalidSelection {
                index: 3,
                options: 3
            })
        ));

        let q = image_question(&menagerie(), &mut rng).unwrap();
        assert!(matches!(
            q.check(17),
            Err(CardError::InvalidSelection {
                index: 17,
                options: 3
            })
        ));
    }
}
