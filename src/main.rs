#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::template::Template;
use dioxus::prelude::*;
use pages::{
  art::Art, carbon::CarbonCredits, commodities::Commodities, diverse::DiverseAssets, home::Home,
  realestate::RealEstate
};

/// Where "Launch App" / "Invest now" send people. Resolved by build.rs.
pub const PLATFORM_APP_URL: &str = env!("PLATFORM_APP_URL");

#[derive(Routable, PartialEq, Clone, Debug)]
enum Route {
  #[layout(Template)]
  #[route("/")]
  Home {},
  #[route("/art")]
  Art {},
  #[route("/carbon-credits")]
  CarbonCredits {},
  #[route("/commodities")]
  Commodities {},
  #[route("/real-estate")]
  RealEstate {},
  #[route("/diverse-assets")]
  DiverseAssets {},
  #[route("/:..route")]
  PageNotFound { route: Vec<String> }
}

fn main() {
  dioxus::launch(App);
}

fn App() -> Element {
  rsx! { Router::<Route> {} }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
  rsx! {
    div {
      class: "not-found",
      h1 { "Page not found" }
      p { "The page you were looking for doesn't exist." }
      pre { "requested path: {route:?}" }
      Link { to: Route::Home { }, "Back to the home page" }
    }
  }
}
