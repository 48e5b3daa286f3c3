#![allow(non_snake_case)]

use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::{Route, PLATFORM_APP_URL};

#[component]
pub fn PageHero(title: &'static str, lede: &'static str, accent: &'static str) -> Element {
  rsx! {
    section {
      class: "hero",
      style: "--hero-accent: {accent}",
      h1 { "{title}" }
      p { class: "hero-lede", "{lede}" }
    }
  }
}

#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> Element {
  rsx! {
    div {
      class: "feature-card",
      h3 {
        class: "feature-card-title",
        span { "{icon}" }
        "{title}"
      }
      p { "{description}" }
    }
  }
}

/// Mocked portfolio widget. Every figure is a static display value, nothing
/// here is quoted, computed or fetched.
#[component]
pub fn InvestmentCard(
  asset_name: &'static str,
  token_price: Decimal,
  projected_yield: Decimal,
  funded_pct: u8,
  min_buy_in: Decimal,
  accent: &'static str
) -> Element {
  rsx! {
    aside {
      class: "investment-card",
      style: "--card-accent: {accent}",
      div {
        class: "investment-card-header",
        span { class: "investment-card-name", "{asset_name}" }
        span { class: "investment-card-badge", "Open" }
      }
      div {
        class: "investment-metrics",
        div {
          class: "investment-metric",
          label { "Token price" }
          span { class: "value", "${token_price}" }
        }
        div {
          class: "investment-metric",
          label { "Projected yield" }
          span { class: "value", "{projected_yield}% p.a." }
        }
        div {
          class: "investment-metric",
          label { "Minimum buy-in" }
          span { class: "value", "${min_buy_in}" }
        }
      }
      div {
        class: "investment-funded",
        div {
          class: "investment-funded-track",
          div {
            class: "investment-funded-fill",
            style: "width: {funded_pct}%"
          }
        }
        span { class: "investment-funded-label", "{funded_pct}% funded" }
      }
      a {
        class: "button investment-card-cta",
        href: PLATFORM_APP_URL,
        target: "_blank",
        "Invest now"
      }
    }
  }
}

#[component]
pub fn CtaSection(headline: &'static str, blurb: &'static str, secondary: Option<Route>) -> Element {
  rsx! {
    section {
      class: "cta-band",
      h2 { "{headline}" }
      p { "{blurb}" }
      div {
        class: "cta-actions",
        a {
          class: "button cta-primary",
          href: PLATFORM_APP_URL,
          target: "_blank",
          "Get Started"
        }
        if secondary.is_some() {
          Link {
            class: "button cta-secondary",
            to: secondary.clone().unwrap(),
            "Browse asset classes"
          }
        }
      }
    }
  }
}
