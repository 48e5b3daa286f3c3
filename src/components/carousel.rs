#![allow(non_snake_case)]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::{logger::tracing::warn, prelude::*};
use futures_util::StreamExt;

use crate::utils::carousel::{position_for, CarouselMachine, Direction, AUTOPLAY_MS, TRANSITION_MS};
use crate::utils::catalog::AssetCard;

pub enum NavCommand {
  Advance,
  Retreat,
  JumpTo(usize)
}

#[component]
pub fn RotatingCarousel(cards: Vec<AssetCard>) -> Element {
  if let Err(err) = CarouselMachine::new(cards.len()) {
    warn!("carousel disabled: {err}");
    return rsx! {};
  }

  let mut machine = use_signal(|| CarouselMachine::new(cards.len()).expect("catalog validated above"));
  // bumped every time the countdown is re-armed, so a stale timer that wakes
  // up after a pause or a manual navigation cannot fire
  let autoplay_gen = use_hook(|| Rc::new(Cell::new(0u64)));

  let nav = use_coroutine(move |mut rx: UnboundedReceiver<NavCommand>| async move {
    while let Some(command) = rx.next().await {
      let started = match command {
        NavCommand::Advance => machine.write().advance(),
        NavCommand::Retreat => machine.write().retreat(),
        NavCommand::JumpTo(target) => {
          if target >= machine.peek().len() {
            warn!("ignoring jump to out-of-range card {target}");
            false
          } else {
            machine.write().jump_to(target)
          }
        }
      };
      if started {
        // one settle task per transition; the guard above means at most one
        // is ever in flight
        spawn(async move {
          async_std::task::sleep(Duration::from_millis(TRANSITION_MS)).await;
          machine.write().settle();
        });
      }
    }
  });

  // Autoplay: a single-shot countdown, re-armed on every machine change
  // (navigation, settle, pause toggles). Tasks die with the component, and
  // the generation check kills countdowns that were superseded in flight.
  use_effect(move || {
    let snapshot = machine();
    let armed_gen = autoplay_gen.get().wrapping_add(1);
    autoplay_gen.set(armed_gen);
    if snapshot.is_paused() {
      return;
    }
    let autoplay_gen = Rc::clone(&autoplay_gen);
    spawn(async move {
      async_std::task::sleep(Duration::from_millis(AUTOPLAY_MS)).await;
      if autoplay_gen.get() == armed_gen && !machine.peek().is_paused() {
        nav.send(NavCommand::Advance);
      }
    });
  });

  let snapshot = machine();
  let stage_class = match snapshot.direction() {
    Direction::Forward => "carousel-stage slide-fwd",
    Direction::Backward => "carousel-stage slide-back"
  };

  static CSS: Asset = asset!("/assets/carousel.css");

  rsx! {
    document::Stylesheet { href: CSS },
    section {
      class: "carousel",
      onmouseenter: move |_| machine.write().set_paused(true),
      onmouseleave: move |_| machine.write().set_paused(false),
      div {
        class: stage_class,
        for (index, card) in cards.iter().cloned().enumerate() {
          CarouselCard { key: "{card.id}", index, card, machine }
        }
      }
      div {
        class: "carousel-controls",
        button {
          class: "carousel-arrow",
          aria_label: "Previous asset class",
          onclick: move |_| nav.send(NavCommand::Retreat),
          "‹"
        }
        div {
          class: "carousel-dots",
          for index in 0..cards.len() {
            button {
              key: "dot-{index}",
              class: if index == snapshot.current() { "carousel-dot carousel-dot-active" } else { "carousel-dot" },
              aria_label: format!("Show card {}", index + 1),
              onclick: move |_| nav.send(NavCommand::JumpTo(index)),
            }
          }
        }
        button {
          class: "carousel-arrow",
          aria_label: "Next asset class",
          onclick: move |_| nav.send(NavCommand::Advance),
          "›"
        }
      }
    }
  }
}

#[component]
fn CarouselCard(index: usize, card: AssetCard, machine: Signal<CarouselMachine>) -> Element {
  let nav = use_coroutine_handle::<NavCommand>();
  let router = use_navigator();

  let snapshot = machine();
  let position = position_for(index, snapshot.current(), snapshot.len());
  let is_front = index == snapshot.current();

  let style = format!(
    "z-index: {}; opacity: {}; transform: translateX({}%) scale({}) rotateY({}deg); border-color: {};",
    position.z_index, position.opacity, position.offset_pct, position.scale, position.rotation_deg, card.accent
  );
  let route = card.route.clone();
  let cta_route = card.route.clone();

  rsx! {
    article {
      class: if is_front { "carousel-card carousel-card-front" } else { "carousel-card" },
      style: "{style}",
      aria_hidden: position.is_hidden(),
      // only the front card navigates; the rest rotate themselves forward
      onclick: move |_| {
        if is_front {
          router.push(route.clone());
        } else {
          nav.send(NavCommand::JumpTo(index));
        }
      },
      h3 { class: "carousel-card-title", "{card.title}" }
      p { class: "carousel-card-tagline", "{card.tagline}" }
      p { class: "carousel-card-detail", "{card.detail}" }
      ul {
        class: "carousel-card-highlights",
        for (point_idx, point) in card.highlights.iter().enumerate() {
          li { key: "{card.id}-point-{point_idx}", "{point}" }
        }
      }
      if is_front {
        button {
          class: "carousel-card-cta",
          onclick: move |evt| {
            evt.stop_propagation();
            router.push(cta_route.clone());
          },
          "Explore {card.title}"
        }
      }
    }
  }
}
