//! Streaming-option normalization
//!
//! Turns the provider's raw, often redundant list of offers for one
//! (title, country) pair into the list shown to the user: grouped by offer
//! type, one entry per service, with subtitle flags derived per entry.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{OfferType, StreamingOffer, Subtitle};

const ENGLISH_CODES: [&str; 2] = ["en", "eng"];
const JAPANESE_CODES: [&str; 2] = ["ja", "jpn"];

/// Which offer groups make it into the normalized output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OfferPolicy {
    /// Also keep rent and buy offers, after the streamable ones
    pub include_purchase: bool,
}

impl OfferPolicy {
    pub fn streaming_only() -> Self {
        Self {
            include_purchase: false,
        }
    }

    pub fn with_purchase() -> Self {
        Self {
            include_purchase: true,
        }
    }
}

/// Offers partitioned by how they can be watched, each bucket in input order
#[derive(Debug, Default)]
pub struct OfferBuckets<'a> {
    /// Subscription and add-on offers
    pub subscription: Vec<&'a StreamingOffer>,
    pub free: Vec<&'a StreamingOffer>,
    pub rent: Vec<&'a StreamingOffer>,
    pub buy: Vec<&'a StreamingOffer>,
}

impl<'a> OfferBuckets<'a> {
    pub fn categorize(offers: &'a [StreamingOffer]) -> Self {
        let mut buckets = OfferBuckets::default();
        for offer in offers {
            match offer.offer_type {
                OfferType::Subscription | OfferType::Addon => buckets.subscription.push(offer),
                OfferType::Free => buckets.free.push(offer),
                OfferType::Rent => buckets.rent.push(offer),
                OfferType::Buy => buckets.buy.push(offer),
            }
        }
        buckets
    }

    /// Candidates for display under `policy`: subscription, free, then
    /// rent and buy when purchases are included
    pub fn candidates(&self, policy: OfferPolicy) -> Vec<&'a StreamingOffer> {
        let mut candidates: Vec<&'a StreamingOffer> = self
            .subscription
            .iter()
            .chain(self.free.iter())
            .copied()
            .collect();

        if policy.include_purchase {
            candidates.extend(self.rent.iter().chain(self.buy.iter()).copied());
        }

        candidates
    }
}

/// Keeps one offer per service id.
///
/// The first offer seen for a service fixes its position. A later offer for
/// the same service replaces it only when the kept one goes through an add-on
/// and the later one doesn't; everything else is discarded.
pub fn dedupe_by_service<'a>(candidates: &[&'a StreamingOffer]) -> Vec<&'a StreamingOffer> {
    let mut kept: Vec<&'a StreamingOffer> = Vec::with_capacity(candidates.len());
    let mut position: HashMap<&'a str, usize> = HashMap::new();

    for &offer in candidates {
        match position.get(offer.service.id.as_str()) {
            None => {
                position.insert(offer.service.id.as_str(), kept.len());
                kept.push(offer);
            }
            Some(&index) => {
                if !offer.via_addon() && kept[index].via_addon() {
                    kept[index] = offer;
                }
            }
        }
    }

    kept
}

fn has_language(subtitles: &[Subtitle], codes: &[&str]) -> bool {
    subtitles.iter().any(|subtitle| {
        let language = subtitle.language.trim();
        codes.iter().any(|code| language.eq_ignore_ascii_case(code))
    })
}

pub fn has_english_subtitles(subtitles: &[Subtitle]) -> bool {
    has_language(subtitles, &ENGLISH_CODES)
}

pub fn has_japanese_subtitles(subtitles: &[Subtitle]) -> bool {
    has_language(subtitles, &JAPANESE_CODES)
}

/// A display-ready offer with its derived subtitle flags
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalizedOffer {
    pub offer: StreamingOffer,
    pub has_english_subtitles: bool,
    pub has_japanese_subtitles: bool,
}

impl NormalizedOffer {
    pub fn from_offer(offer: &StreamingOffer) -> Self {
        Self {
            has_english_subtitles: has_english_subtitles(&offer.subtitles),
            has_japanese_subtitles: has_japanese_subtitles(&offer.subtitles),
            offer: offer.clone(),
        }
    }
}

/// Runs the full pipeline: categorize, select, dedupe, flag.
///
/// An empty result means nothing is watchable under `policy` in this
/// country; it is never an error.
pub fn normalize(offers: &[StreamingOffer], policy: OfferPolicy) -> Vec<NormalizedOffer> {
    let buckets = OfferBuckets::categorize(offers);
    let candidates = buckets.candidates(policy);

    dedupe_by_service(&candidates)
        .into_iter()
        .map(NormalizedOffer::from_offer)
        .collect()
}
