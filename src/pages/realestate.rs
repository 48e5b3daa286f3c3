use dioxus::prelude::*;
use rust_decimal_macros::dec;

use crate::components::showcase::{CtaSection, FeatureCard, InvestmentCard, PageHero};
use crate::utils::browser::scroll_to_top;
use crate::Route;

#[component]
pub fn RealEstate() -> Element {
  static CSS: Asset = asset!("/assets/showcase.css");

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "showcase-page",
      onmounted: move |_evt| scroll_to_top(),
      PageHero {
        title: "Real Estate",
        lede: "Commercial and residential income property, split into tokens that pay rent. Skip the mortgage, keep the yield.",
        accent: "var(--accent-realestate)"
      },
      section {
        class: "features",
        FeatureCard {
          icon: "🏢",
          title: "Income First",
          description: "Every listed property is tenanted and cash-flowing before it reaches the platform. Rental income lands in your account monthly."
        }
        FeatureCard {
          icon: "🗂️",
          title: "Full Documentation",
          description: "Title deeds, lien searches, tenancy schedules and inspection reports, published with every listing."
        }
        FeatureCard {
          icon: "🤝",
          title: "Professional Management",
          description: "Vetted local managers handle tenants and maintenance; their fees and performance are reported on-platform."
        }
      },
      section {
        class: "showcase-split",
        div {
          class: "showcase-copy",
          h2 { "Be the landlord, skip the 3 a.m. calls" }
          p { "Direct property ownership means concentration risk and management headaches. Tokenized buildings let you spread one deposit across ten cities instead of one door." }
          p { "Collect your share of the rent monthly and exit through the secondary market when you're done." }
        }
        InvestmentCard {
          asset_name: "Riverside Logistics Park, Unit B",
          token_price: dec!(103.50),
          projected_yield: dec!(6.8),
          funded_pct: 74,
          min_buy_in: dec!(103.50),
          accent: "var(--accent-realestate)"
        }
      },
      CtaSection {
        headline: "Collect rent from day one",
        blurb: "Tenanted, documented, managed. All you add is capital.",
        secondary: Route::DiverseAssets { }
      }
    }
  }
}
