use dioxus::prelude::*;
use rust_decimal_macros::dec;

use crate::components::showcase::{CtaSection, FeatureCard, InvestmentCard, PageHero};
use crate::utils::browser::scroll_to_top;
use crate::Route;

#[component]
pub fn DiverseAssets() -> Element {
  static CSS: Asset = asset!("/assets/showcase.css");

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "showcase-page",
      onmounted: move |_evt| scroll_to_top(),
      PageHero {
        title: "Diverse Assets",
        lede: "Royalties, collectibles and infrastructure revenue: the yield-bearing long tail that never fit in a brokerage account.",
        accent: "var(--accent-diverse)"
      },
      section {
        class: "features",
        FeatureCard {
          icon: "🎵",
          title: "Royalty Streams",
          description: "Music catalogs and media rights with years of payout history, paying out as the streams keep coming."
        }
        FeatureCard {
          icon: "🃏",
          title: "Graded Collectibles",
          description: "Cards, watches and memorabilia, professionally graded, vaulted and insured, with the grading certificates on file."
        }
        FeatureCard {
          icon: "🔌",
          title: "Infrastructure Shares",
          description: "Revenue participations in solar farms, EV charging networks and fiber routes, backed by long-term offtake contracts."
        }
      },
      section {
        class: "showcase-split",
        div {
          class: "showcase-copy",
          h2 { "Diversification beyond the textbook" }
          p { "Assets whose cash flows don't track the stock market are the rarest ingredient in a portfolio. Most were simply unbuyable at retail size until now." }
          p { "Mix royalty streams with infrastructure revenue and let the long tail work for you." }
        }
        InvestmentCard {
          asset_name: "90s catalog royalty pool",
          token_price: dec!(25.00),
          projected_yield: dec!(11.3),
          funded_pct: 58,
          min_buy_in: dec!(25.00),
          accent: "var(--accent-diverse)"
        }
      },
      CtaSection {
        headline: "Own what nobody else does",
        blurb: "The long tail of real-world yield, one token at a time.",
        secondary: Route::Art { }
      }
    }
  }
}
