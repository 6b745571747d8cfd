//! Seller-by-buyer sentiment matrix backing the stakeholder sentiment panel.

use serde::{Deserialize, Serialize};

use crate::domain::deal::Deal;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbRating {
    Poor,
    Fair,
    Good,
}

pub fn thumb_rating(progress: u8) -> ThumbRating {
    if progress >= 70 {
        ThumbRating::Good
    } else if progress >= 40 {
        ThumbRating::Fair
    } else {
        ThumbRating::Poor
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StabilityBand {
    AtRisk,
    Watch,
    Stable,
}

impl StabilityBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AtRisk => "At Risk",
            Self::Watch => "Watch",
            Self::Stable => "Stable",
        }
    }
}

pub fn stability_band(progress: u8) -> StabilityBand {
    if progress < 30 {
        StabilityBand::AtRisk
    } else if progress < 50 {
        StabilityBand::Watch
    } else {
        StabilityBand::Stable
    }
}

/// Review frequency for one seller/buyer pair, floored at one so every cell
/// renders a count.
pub fn interaction_count(seller_index: usize, progress: u8) -> u32 {
    (u32::from(progress / 10) + (seller_index % 3) as u32).max(1)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerProfile {
    pub name: String,
    pub title: String,
}

impl SellerProfile {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self { name: name.into(), title: title.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub seller: String,
    pub buyer: String,
    pub rating: ThumbRating,
    pub count: u32,
}

/// Row-major seller x buyer grid. Buyers are the deal's stakeholders in
/// record order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentMatrix {
    pub sellers: Vec<SellerProfile>,
    pub buyers: Vec<String>,
    pub cells: Vec<MatrixCell>,
}

impl SentimentMatrix {
    pub fn build(deal: &Deal, sellers: &[SellerProfile]) -> Self {
        let buyers: Vec<String> =
            deal.stakeholder_details.iter().map(|stakeholder| stakeholder.name.clone()).collect();

        let mut cells = Vec::with_capacity(sellers.len() * buyers.len());
        for (seller_index, seller) in sellers.iter().enumerate() {
            for buyer in &deal.stakeholder_details {
                cells.push(MatrixCell {
                    seller: seller.name.clone(),
                    buyer: buyer.name.clone(),
                    rating: thumb_rating(buyer.progress),
                    count: interaction_count(seller_index, buyer.progress),
                });
            }
        }

        Self { sellers: sellers.to_vec(), buyers, cells }
    }

    pub fn cell(&self, seller_index: usize, buyer_index: usize) -> Option<&MatrixCell> {
        if buyer_index >= self.buyers.len() {
            return None;
        }
        self.cells.get(seller_index * self.buyers.len() + buyer_index)
    }
}
