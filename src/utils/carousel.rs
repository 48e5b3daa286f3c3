use std::fmt;

/// How long a card transition animates before navigation unlocks again.
pub const TRANSITION_MS: u64 = 600;
/// Countdown between automatic advances while autoplay is running.
pub const AUTOPLAY_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Idle,
  Transitioning
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Forward,
  Backward
}

impl Direction {
  pub fn signum(self) -> i8 {
    match self {
      Direction::Forward => 1,
      Direction::Backward => -1
    }
  }
}

// Catalog contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
  EmptyCatalog
}

impl std::error::Error for CarouselError {}

impl fmt::Display for CarouselError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CarouselError::EmptyCatalog => write!(f, "carousel needs at least one card")
    }
  }
}

/// Rotation state for a fixed sequence of cards. Navigation is locked while a
/// transition is in flight; a request arriving mid-transition is dropped, not
/// queued. The machine owns no timers, callers settle it when the transition
/// duration elapses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselMachine {
  len: usize,
  current: usize,
  phase: Phase,
  direction: Direction,
  paused: bool
}

impl CarouselMachine {
  pub fn new(len: usize) -> Result<Self, CarouselError> {
    if len == 0 {
      return Err(CarouselError::EmptyCatalog);
    }
    Ok(CarouselMachine {
      len,
      current: 0,
      phase: Phase::Idle,
      direction: Direction::Forward,
      paused: false
    })
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn current(&self) -> usize {
    self.current
  }

  pub fn direction(&self) -> Direction {
    self.direction
  }

  pub fn is_transitioning(&self) -> bool {
    self.phase == Phase::Transitioning
  }

  pub fn is_paused(&self) -> bool {
    self.paused
  }

  /// Step one card forward. Returns whether a transition actually started.
  pub fn advance(&mut self) -> bool {
    if self.is_transitioning() {
      return false;
    }
    self.direction = Direction::Forward;
    self.current = (self.current + 1) % self.len;
    self.phase = Phase::Transitioning;
    true
  }

  /// Step one card back.
  pub fn retreat(&mut self) -> bool {
    if self.is_transitioning() {
      return false;
    }
    self.direction = Direction::Backward;
    self.current = (self.current + self.len - 1) % self.len;
    self.phase = Phase::Transitioning;
    true
  }

  /// Jump straight to `target`. Out-of-range targets are ignored; jumping to
  /// the current card still runs a transition with the index unchanged.
  pub fn jump_to(&mut self, target: usize) -> bool {
    if self.is_transitioning() || target >= self.len {
      return false;
    }
    // shorter way round the cycle decides the animation direction
    let forward_dist = (target + self.len - self.current) % self.len;
    self.direction = if forward_dist <= self.len / 2 {
      Direction::Forward
    } else {
      Direction::Backward
    };
    self.current = target;
    self.phase = Phase::Transitioning;
    true
  }

  /// Transition duration elapsed, unlock navigation.
  pub fn settle(&mut self) {
    self.phase = Phase::Idle;
  }

  pub fn set_paused(&mut self, paused: bool) {
    self.paused = paused;
  }
}

/// Visual placement of one card relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionDescriptor {
  pub z_index: i32,
  pub scale: f64,
  pub opacity: f64,
  pub offset_pct: f64,
  pub rotation_deg: f64
}

impl PositionDescriptor {
  pub fn is_hidden(&self) -> bool {
    self.opacity == 0.0
  }
}

/// Maps a card onto its slot around the active card. Total over `diff`: every
/// card lands in exactly one bucket, and for short catalogs the earlier
/// buckets win (a two-card deck has a front and a one-right, nothing else).
pub fn position_for(card_index: usize, current_index: usize, len: usize) -> PositionDescriptor {
  debug_assert!(len > 0, "position_for called with an empty catalog");
  debug_assert!(card_index < len && current_index < len, "indices must be in range");

  let diff = (card_index + len - current_index) % len;

  if diff == 0 {
    // front and center
    PositionDescriptor { z_index: 50, scale: 1.0, opacity: 1.0, offset_pct: 0.0, rotation_deg: 0.0 }
  } else if diff == 1 {
    PositionDescriptor { z_index: 40, scale: 0.85, opacity: 0.7, offset_pct: 40.0, rotation_deg: -12.0 }
  } else if diff == 2 {
    PositionDescriptor { z_index: 30, scale: 0.70, opacity: 0.5, offset_pct: 70.0, rotation_deg: -24.0 }
  } else if diff == len - 1 {
    PositionDescriptor { z_index: 40, scale: 0.85, opacity: 0.7, offset_pct: -40.0, rotation_deg: 12.0 }
  } else if diff == len - 2 {
    PositionDescriptor { z_index: 30, scale: 0.70, opacity: 0.5, offset_pct: -70.0, rotation_deg: 24.0 }
  } else if diff < len / 2 {
    // buried on the right
    PositionDescriptor { z_index: 10, scale: 0.5, opacity: 0.0, offset_pct: 100.0, rotation_deg: -32.0 }
  } else {
    // buried on the left
    PositionDescriptor { z_index: 10, scale: 0.5, opacity: 0.0, offset_pct: -100.0, rotation_deg: 32.0 }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_catalog_is_rejected() {
    assert_eq!(CarouselMachine::new(0), Err(CarouselError::EmptyCatalog));
    assert!(CarouselMachine::new(1).is_ok());
  }

  #[test]
  fn exactly_one_front_card_per_render() {
    for len in 1..=9 {
      let mut machine = CarouselMachine::new(len).unwrap();
      for _ in 0..len {
        let front_count = (0..len)
          .filter(|&card| position_for(card, machine.current(), len).offset_pct == 0.0)
          .count();
        assert_eq!(front_count, 1, "len={len} current={}", machine.current());
        machine.advance();
        machine.settle();
      }
    }
  }

  #[test]
  fn advance_then_retreat_round_trips() {
    for start in 0..8 {
      let mut machine = CarouselMachine::new(8).unwrap();
      machine.jump_to(start);
      machine.settle();

      assert!(machine.advance());
      machine.settle();
      assert!(machine.retreat());
      machine.settle();
      assert_eq!(machine.current(), start);
    }
  }

  #[test]
  fn n_advances_cycle_back_to_start() {
    let mut machine = CarouselMachine::new(5).unwrap();
    machine.jump_to(3);
    machine.settle();

    for _ in 0..5 {
      assert!(machine.advance());
      machine.settle();
    }
    assert_eq!(machine.current(), 3);
  }

  #[test]
  fn navigation_is_dropped_while_transitioning() {
    let mut machine = CarouselMachine::new(8).unwrap();
    machine.jump_to(2);
    machine.settle();

    assert!(machine.advance());
    assert_eq!(machine.current(), 3);
    // back-to-back requests before the transition elapses are no-ops
    assert!(!machine.advance());
    assert!(!machine.retreat());
    assert!(!machine.jump_to(7));
    assert_eq!(machine.current(), 3);
    assert!(machine.is_transitioning());

    machine.settle();
    assert!(machine.advance());
    assert_eq!(machine.current(), 4);
  }

  #[test]
  fn jump_to_current_is_a_noop_transition() {
    let mut machine = CarouselMachine::new(5).unwrap();
    machine.jump_to(2);
    machine.settle();

    assert!(machine.jump_to(2));
    assert!(machine.is_transitioning());
    assert_eq!(machine.current(), 2);
    machine.settle();
    assert_eq!(machine.current(), 2);
  }

  #[test]
  fn out_of_range_jump_is_ignored() {
    let mut machine = CarouselMachine::new(5).unwrap();
    assert!(!machine.jump_to(5));
    assert!(!machine.jump_to(42));
    assert_eq!(machine.current(), 0);
    assert!(!machine.is_transitioning());
  }

  #[test]
  fn jump_direction_takes_the_short_way_round() {
    let mut machine = CarouselMachine::new(8).unwrap();

    assert!(machine.jump_to(3));
    assert_eq!(machine.direction(), Direction::Forward);
    machine.settle();

    assert!(machine.jump_to(2));
    assert_eq!(machine.direction(), Direction::Backward);
    assert_eq!(machine.direction().signum(), -1);
    machine.settle();

    // wrap: 2 -> 7 is one step back
    assert!(machine.jump_to(7));
    assert_eq!(machine.direction(), Direction::Backward);
  }

  #[test]
  fn pausing_only_toggles_the_flag() {
    let mut machine = CarouselMachine::new(5).unwrap();
    machine.set_paused(true);
    assert!(machine.is_paused());
    assert_eq!(machine.current(), 0);
    assert!(!machine.is_transitioning());

    // navigation still works while paused, autoplay gating is the caller's job
    assert!(machine.advance());
    assert_eq!(machine.current(), 1);

    machine.set_paused(false);
    assert!(!machine.is_paused());
  }

  #[test]
  fn eight_card_buckets_match_the_layout() {
    let len = 8;
    let current = 0;

    let front = position_for(0, current, len);
    assert_eq!((front.offset_pct, front.opacity, front.scale), (0.0, 1.0, 1.0));

    let one_right = position_for(1, current, len);
    assert_eq!((one_right.offset_pct, one_right.opacity, one_right.scale), (40.0, 0.7, 0.85));

    let two_right = position_for(2, current, len);
    assert_eq!((two_right.offset_pct, two_right.opacity, two_right.scale), (70.0, 0.5, 0.70));

    let one_left = position_for(7, current, len);
    assert_eq!((one_left.offset_pct, one_left.opacity, one_left.scale), (-40.0, 0.7, 0.85));

    let two_left = position_for(6, current, len);
    assert_eq!((two_left.offset_pct, two_left.opacity, two_left.scale), (-70.0, 0.5, 0.70));

    // 3, 4, 5 are buried; side picked by which half of the cycle they sit in
    assert!(position_for(3, current, len).is_hidden());
    assert_eq!(position_for(3, current, len).offset_pct, 100.0);
    assert_eq!(position_for(4, current, len).offset_pct, -100.0);
    assert_eq!(position_for(5, current, len).offset_pct, -100.0);
  }

  #[test]
  fn short_catalogs_degrade_to_the_early_buckets() {
    // two cards: a front and a one-right, never a left slot
    let one_right = position_for(1, 0, 2);
    assert_eq!(one_right.offset_pct, 40.0);

    // three cards: diff 2 hits the two-right bucket before the one-left check
    let two_right = position_for(2, 0, 3);
    assert_eq!(two_right.offset_pct, 70.0);

    // a lone card is always front and center
    let solo = position_for(0, 0, 1);
    assert_eq!((solo.offset_pct, solo.opacity), (0.0, 1.0));
  }

  #[test]
  fn every_card_gets_exactly_one_descriptor() {
    for len in 1..=9 {
      for current in 0..len {
        for card in 0..len {
          // total function: no panic, sane ranges
          let pos = position_for(card, current, len);
          assert!(pos.opacity >= 0.0 && pos.opacity <= 1.0);
          assert!(pos.scale > 0.0 && pos.scale <= 1.0);
        }
      }
    }
  }
}
