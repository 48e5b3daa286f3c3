use dioxus::prelude::*;

use crate::components::carousel::RotatingCarousel;
use crate::components::showcase::{CtaSection, FeatureCard};
use crate::utils::browser::scroll_to_top;
use crate::utils::catalog::asset_cards;
use crate::{Route, PLATFORM_APP_URL};

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("/assets/home.css");
  // shared component styles (feature cards, CTA band)
  static SHOWCASE_CSS: Asset = asset!("/assets/showcase.css");

  rsx! {
    document::Stylesheet { href: CSS },
    document::Stylesheet { href: SHOWCASE_CSS },
    div {
      class: "home-page",
      onmounted: move |_evt| scroll_to_top(),
      section {
        class: "hero",
        h1 { "Real-World Assets, Tokenized" }
        p { "Fine art, carbon credits, commodities and income property, split into digital fractions anyone can own. Browse the asset classes below and start with a single token." }
        a {
          class: "cta-button",
          href: PLATFORM_APP_URL,
          target: "_blank",
          "Start Investing"
        }
      },
      section {
        class: "features",
        FeatureCard {
          icon: "🔖",
          title: "Fractional Ownership",
          description: "Assets that used to take institutional money now split into tokens. Buy as little as one fraction and build a position over time."
        }
        FeatureCard {
          icon: "🛡️",
          title: "Held in Custody",
          description: "Every tokenized asset is held by a regulated custodian with documentation you can inspect before you commit a cent."
        }
        FeatureCard {
          icon: "🔁",
          title: "Liquid by Design",
          description: "List your fractions on the secondary market whenever you want out. No lock-ups, no phone calls, no paperwork."
        }
      },
      section {
        class: "asset-classes",
        h2 { "Five ways in" }
        p { class: "asset-classes-lede", "One platform, five asset classes. Flip through the deck, open the one that fits." }
        RotatingCarousel { cards: asset_cards() }
      },
      CtaSection {
        headline: "Ready when you are",
        blurb: "Open an account in minutes and put your first token to work.",
        secondary: Route::Art { }
      }
    }
  }
}
