#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::{Route, PLATFORM_APP_URL};

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("/assets/template.css");

  rsx! {
    document::Stylesheet { href: CSS },
    Header { }
    Outlet::<Route> {}
    Footer { }
  }
}

#[component]
fn Header() -> Element {
  rsx! {
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          active_class: "nav-active",
          to: Route::Home { },
          svg {
            class: "logo-mark",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 32 32",
            width: "28",
            height: "28",
            rect { x: "3", y: "3", width: "26", height: "26", rx: "7", fill: "currentcolor", opacity: "0.15" }
            path {
              d: "M16 7l8 5v8l-8 5-8-5v-8z",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linejoin: "round"
            }
            circle { cx: "16", cy: "16", r: "3", fill: "currentcolor" }
          }
          "Assetra"
        }
        div {
          class: "nav-links",
          Link { active_class: "nav-active", to: Route::Art { }, "Art" },
          Link { active_class: "nav-active", to: Route::CarbonCredits { }, "Carbon Credits" },
          Link { active_class: "nav-active", to: Route::Commodities { }, "Commodities" },
          Link { active_class: "nav-active", to: Route::RealEstate { }, "Real Estate" },
          Link { active_class: "nav-active", to: Route::DiverseAssets { }, "Diverse Assets" },
          a {
            class: "nav-cta",
            href: PLATFORM_APP_URL,
            target: "_blank",
            "Launch App"
          }
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  rsx! {
    footer {
      div {
        class: "footer-container",
        div {
          class: "copyright",
          p { "© 2026 Assetra Labs" }
          p { "Tokenized exposure to real-world assets. Figures shown on this site are illustrative only." }
        },
        div {
          class: "social-links",
          a {
            href: "mailto:hello@assetra.io",
            class: "social-link",
            title: "Email",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"
              }
              polyline {
                points: "22,6 12,13 2,6"
              }
            }
          }
          a {
            href: "https://github.com/assetra-labs",
            target: "_blank",
            class: "social-link",
            title: "Github",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"
              }
            }
          }
          a {
            href: "https://x.com/assetra",
            target: "_blank",
            class: "social-link",
            title: "X",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path { d: "M4 4l16 16" }
              path { d: "M20 4L4 20" }
            }
          }
        }
      }
    }
  }
}
