//! Picks the real passer on plays where more than one quarterback logged
//! participation.
//!
//! The rule deciding who threw is a heuristic over the play description, so it
//! lives behind [`QuarterbackMatcher`] and the extractor only ever sees the
//! resolved `game_play_id -> nflId` mapping.

use crate::keys::format_game_play_nfl_id;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quarterback {
	pub nfl_id: i64,
	pub display_name: String,
}

impl Quarterback {
	pub fn new(nfl_id: i64, display_name: impl Into<String>) -> Self {
		Self {
			nfl_id,
			display_name: display_name.into(),
		}
	}

	/// Last whitespace-delimited token of the display name.
	#[must_use]
	pub fn family_name(&self) -> Option<&str> {
		self.display_name.split_whitespace().next_back()
	}
}

pub trait QuarterbackMatcher {
	/// Returns the nflId of the quarterback `description` credits, searching
	/// `roster` in order.
	fn identify(&self, description: &str, roster: &[Quarterback]) -> Option<i64>;
}

/// First quarterback in roster order whose family name occurs anywhere in the
/// description.
#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyNameMatcher;

impl QuarterbackMatcher for FamilyNameMatcher {
	fn identify(&self, description: &str, roster: &[Quarterback]) -> Option<i64> {
		roster
			.iter()
			.find(|qb| qb.family_name().is_some_and(|name| description.contains(name)))
			.map(|qb| qb.nfl_id)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousPlay {
	pub game_play_id: String,
	/// Quarterbacks with a participation row on the play, in row order.
	pub candidates: Vec<i64>,
}

/// Groups `(game_play_id, nflId)` rows by play and returns the plays with more
/// than one row, in order of first appearance.
pub fn find_ambiguous_plays<'a>(rows: impl IntoIterator<Item = (&'a str, i64)>) -> Vec<AmbiguousPlay> {
	let mut order: Vec<&'a str> = Vec::new();
	let mut groups: HashMap<&'a str, Vec<i64>> = HashMap::new();

	for (game_play_id, nfl_id) in rows {
		groups
			.entry(game_play_id)
			.or_insert_with(|| {
				order.push(game_play_id);
				Vec::new()
			})
			.push(nfl_id);
	}

	order
		.into_iter()
		.filter_map(|game_play_id| {
			let candidates = groups.remove(game_play_id)?;
			(candidates.len() > 1).then(|| AmbiguousPlay {
				game_play_id: game_play_id.to_string(),
				candidates,
			})
		})
		.collect()
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Resolution {
	/// `game_play_id -> nflId` of the quarterback kept for each resolved play.
	pub resolved: BTreeMap<String, i64>,
	/// Plays whose description named none of their own quarterbacks.
	pub dropped: Vec<AmbiguousPlay>,
}

impl Resolution {
	/// `game_play_nfl_id` of every participation row that survives.
	#[must_use]
	pub fn kept_keys(&self) -> HashSet<String> {
		self.resolved.iter().map(|(game_play_id, &nfl_id)| format_game_play_nfl_id(game_play_id, nfl_id)).collect()
	}
}

/// Resolves each ambiguous play against its description. A play resolves only
/// when the matched quarterback is one of its own candidates; otherwise, or when
/// the play has no description, it lands in [`Resolution::dropped`].
pub fn resolve_ambiguous_plays<M>(ambiguous: &[AmbiguousPlay], descriptions: &HashMap<String, String>, roster: &[Quarterback], matcher: &M) -> Resolution
where
	M: QuarterbackMatcher + ?Sized,
{
	ambiguous.iter().fold(Resolution::default(), |mut resolution, play| {
		let passer = descriptions
			.get(&play.game_play_id)
			.and_then(|description| matcher.identify(description, roster))
			.filter(|nfl_id| play.candidates.contains(nfl_id));

		match passer {
			Some(nfl_id) => {
				resolution.resolved.insert(play.game_play_id.clone(), nfl_id);
			}
			None => resolution.dropped.push(play.clone()),
		}
		resolution
	})
}
