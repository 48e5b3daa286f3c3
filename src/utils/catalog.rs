use crate::Route;

/// One entry of the asset-class deck. The whole catalog is bundled at build
/// time and handed to the carousel once, it is never reloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCard {
  pub id: &'static str,
  pub title: &'static str,
  pub tagline: &'static str,
  pub detail: &'static str,
  pub highlights: &'static [&'static str],
  pub accent: &'static str,
  pub route: Route
}

pub fn asset_cards() -> Vec<AssetCard> {
  vec![
    AssetCard {
      id: "art",
      title: "Fine Art",
      tagline: "Own a share of museum-grade works",
      detail: "Blue-chip paintings and sculpture, held in insured vaults and split into tradable fractions.",
      highlights: &[
        "Provenance verified by independent appraisers",
        "Fractions from a single token",
        "Quarterly valuation reports"
      ],
      accent: "var(--accent-art)",
      route: Route::Art {}
    },
    AssetCard {
      id: "carbon",
      title: "Carbon Credits",
      tagline: "Back verified climate projects",
      detail: "Registry-issued carbon credits from reforestation and capture projects, retired or traded on-platform.",
      highlights: &[
        "Gold Standard and Verra registries",
        "Retirement receipts on request",
        "Project-level impact tracking"
      ],
      accent: "var(--accent-carbon)",
      route: Route::CarbonCredits {}
    },
    AssetCard {
      id: "commodities",
      title: "Commodities",
      tagline: "Hard assets without the warehouse",
      detail: "Allocated precious metals and agricultural lots, audited quarterly and redeemable in kind.",
      highlights: &[
        "Allocated storage, not paper claims",
        "Audited vault statements",
        "Redeemable above minimum lots"
      ],
      accent: "var(--accent-commodities)",
      route: Route::Commodities {}
    },
    AssetCard {
      id: "real-estate",
      title: "Real Estate",
      tagline: "Income property, piece by piece",
      detail: "Commercial and residential buildings with rental income distributed to token holders monthly.",
      highlights: &[
        "Monthly rental distributions",
        "Full title and lien documentation",
        "Exit via secondary market"
      ],
      accent: "var(--accent-realestate)",
      route: Route::RealEstate {}
    },
    AssetCard {
      id: "diverse",
      title: "Diverse Assets",
      tagline: "Everything else worth owning",
      detail: "Collectibles, royalties, infrastructure and other yield-bearing assets that resist easy labels.",
      highlights: &[
        "Music and media royalties",
        "Rare collectibles and memorabilia",
        "Infrastructure revenue shares"
      ],
      accent: "var(--accent-diverse)",
      route: Route::DiverseAssets {}
    }
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn catalog_is_never_empty() {
    assert!(!asset_cards().is_empty());
  }

  #[test]
  fn card_ids_and_routes_are_unique() {
    let cards = asset_cards();
    let ids: HashSet<_> = cards.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), cards.len());

    let routes: HashSet<_> = cards.iter().map(|c| format!("{:?}", c.route)).collect();
    assert_eq!(routes.len(), cards.len());
  }

  #[test]
  fn every_card_has_copy_to_render() {
    for card in asset_cards() {
      assert!(!card.title.is_empty());
      assert!(!card.tagline.is_empty());
      assert!(!card.detail.is_empty());
      assert!(!card.highlights.is_empty());
    }
  }
}
