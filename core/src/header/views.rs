use std::sync::Arc;

use crate::types::Player;

/// Concatenates `push` over `players`, writing `new_team` before a player
/// whose team differs from the previous player's and `same_team` otherwise.
/// Nothing is written before the first player.
pub(super) fn join_by_team<F>(
    players: &[Arc<Player>],
    same_team: &str,
    new_team: &str,
    mut push: F,
) -> String
where
    F: FnMut(&mut String, &Player),
{
    let mut out = String::new();
    let mut prev_team = None;
    for p in players {
        match prev_team {
            Some(team) if team != p.team() => out.push_str(new_team),
            Some(_) => out.push_str(same_team),
            None => {}
        }
        push(&mut out, p);
        prev_team = Some(p.team());
    }
    out
}
