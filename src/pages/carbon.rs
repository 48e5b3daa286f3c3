use dioxus::prelude::*;
use rust_decimal_macros::dec;

use crate::components::showcase::{CtaSection, FeatureCard, InvestmentCard, PageHero};
use crate::utils::browser::scroll_to_top;
use crate::Route;

#[component]
pub fn CarbonCredits() -> Element {
  static CSS: Asset = asset!("/assets/showcase.css");

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "showcase-page",
      onmounted: move |_evt| scroll_to_top(),
      PageHero {
        title: "Carbon Credits",
        lede: "Registry-issued credits from verified climate projects. Hold them as the market reprices carbon, or retire them and claim the impact.",
        accent: "var(--accent-carbon)"
      },
      section {
        class: "features",
        FeatureCard {
          icon: "🌱",
          title: "Verified Projects",
          description: "Only credits issued by Gold Standard and Verra registries make it onto the platform, each tied to a named, auditable project."
        }
        FeatureCard {
          icon: "📉",
          title: "Transparent Pricing",
          description: "Live reference pricing against the major voluntary-market indices, so you always know what your credits are worth."
        }
        FeatureCard {
          icon: "🔥",
          title: "Retire On Demand",
          description: "Offset your own footprint with one click. Retired credits are removed from circulation and receipted to your account."
        }
      },
      section {
        class: "showcase-split",
        div {
          class: "showcase-copy",
          h2 { "Own the transition" }
          p { "Corporate net-zero pledges are colliding with a shrinking supply of quality credits. Tokenized credits let you hold that scarcity directly." }
          p { "Trade them like any other asset, or retire them and take the offset yourself, on your schedule." }
        }
        InvestmentCard {
          asset_name: "Rimba Raya REDD+ vintage 2024",
          token_price: dec!(14.75),
          projected_yield: dec!(7.4),
          funded_pct: 67,
          min_buy_in: dec!(14.75),
          accent: "var(--accent-carbon)"
        }
      },
      CtaSection {
        headline: "Put carbon on your balance sheet",
        blurb: "Buy, hold or retire verified credits from a single dashboard.",
        secondary: Route::Commodities { }
      }
    }
  }
}
