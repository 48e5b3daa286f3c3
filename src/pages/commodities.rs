use dioxus::prelude::*;
use rust_decimal_macros::dec;

use crate::components::showcase::{CtaSection, FeatureCard, InvestmentCard, PageHero};
use crate::utils::browser::scroll_to_top;
use crate::Route;

#[component]
pub fn Commodities() -> Element {
  static CSS: Asset = asset!("/assets/showcase.css");

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "showcase-page",
      onmounted: move |_evt| scroll_to_top(),
      PageHero {
        title: "Commodities",
        lede: "Allocated gold, silver and agricultural lots, tokenized down to gram scale. Hard assets without the warehouse keys.",
        accent: "var(--accent-commodities)"
      },
      section {
        class: "features",
        FeatureCard {
          icon: "🥇",
          title: "Allocated, Not Paper",
          description: "Your tokens map to specific bars and lots in named vaults: allocated storage, never an unsecured claim on a dealer's balance sheet."
        }
        FeatureCard {
          icon: "🔍",
          title: "Quarterly Audits",
          description: "Independent auditors reconcile vault contents against token supply every quarter and publish the statements in full."
        }
        FeatureCard {
          icon: "📦",
          title: "Physical Redemption",
          description: "Holdings above the minimum lot can be redeemed in kind and delivered, or sold back to the pool at spot."
        }
      },
      section {
        class: "showcase-split",
        div {
          class: "showcase-copy",
          h2 { "The oldest hedge, modernized" }
          p { "Metals and staples have anchored portfolios for centuries. Tokenization removes the storage, assay and settlement friction that kept retail out of allocated holdings." }
          p { "Buy by the gram, sell by the gram, redeem by the bar." }
        }
        InvestmentCard {
          asset_name: "LBMA gold pool, Zurich vault",
          token_price: dec!(76.10),
          projected_yield: dec!(4.2),
          funded_pct: 91,
          min_buy_in: dec!(76.10),
          accent: "var(--accent-commodities)"
        }
      },
      CtaSection {
        headline: "Add weight to your portfolio",
        blurb: "Allocated commodities from a gram upwards, settled in seconds.",
        secondary: Route::RealEstate { }
      }
    }
  }
}
