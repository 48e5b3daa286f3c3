use dioxus::prelude::*;
use rust_decimal_macros::dec;

use crate::components::showcase::{CtaSection, FeatureCard, InvestmentCard, PageHero};
use crate::utils::browser::scroll_to_top;
use crate::Route;

#[component]
pub fn Art() -> Element {
  static CSS: Asset = asset!("/assets/showcase.css");

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "showcase-page",
      onmounted: move |_evt| scroll_to_top(),
      PageHero {
        title: "Fine Art",
        lede: "Museum-grade paintings and sculpture, fractionalized. Own a verified share of works that used to hang behind auction-house paywalls.",
        accent: "var(--accent-art)"
      },
      section {
        class: "features",
        FeatureCard {
          icon: "🖼️",
          title: "Curated Works",
          description: "Our advisory board selects blue-chip pieces with established secondary demand. No speculative drops, no unsigned prints."
        }
        FeatureCard {
          icon: "📜",
          title: "Verified Provenance",
          description: "Every work ships with an independent appraisal and a full chain of title you can read before buying a single fraction."
        }
        FeatureCard {
          icon: "🏛️",
          title: "Insured Storage",
          description: "Works rest in climate-controlled, fully insured vaults, with periodic public exhibitions that support the valuation."
        }
      },
      section {
        class: "showcase-split",
        div {
          class: "showcase-copy",
          h2 { "A Basquiat in your portfolio" }
          p { "Art has outpaced broad equity indices over several decades but stayed out of reach behind seven-figure tickets. Fractions change the entry price, not the asset." }
          p { "Hold for the long run or list your fractions on the secondary market whenever a sale suits you." }
        }
        InvestmentCard {
          asset_name: "Untitled (1982), collection share",
          token_price: dec!(48.20),
          projected_yield: dec!(9.1),
          funded_pct: 83,
          min_buy_in: dec!(48.20),
          accent: "var(--accent-art)"
        }
      },
      CtaSection {
        headline: "Start your collection",
        blurb: "From a single token. No storage, no brokers, no white gloves required.",
        secondary: Route::CarbonCredits { }
      }
    }
  }
}
