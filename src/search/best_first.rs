use super::Strategy;
use crate::{Cost, Frontier, Graph, Ledger, SearchConfig};

use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// the slots from start to goal
    Found(Vec<usize>),
    Unreachable,
    Cancelled,
}

/// The single expand-and-relax loop behind all four Strategies.
///
/// Works on Graph slots. `start` and `goal` must be valid slots of `graph`.
pub(crate) fn best_first_search<Id: Copy + Eq + Hash>(
    graph: &Graph<Id>,
    strategy: Strategy,
    start: usize,
    goal: usize,
    heuristic: &dyn Fn(Id, Id) -> Cost,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
) -> Outcome {
    let goal_id = graph.id_at(goal);
    let h = |slot: usize| heuristic(graph.id_at(slot), goal_id);
    let weight = config.heuristic_weight;

    // no search discovers more Nodes than the Graph has
    let capacity = config.size_hint.min(graph.len());
    let mut ledger = Ledger::with_capacity(capacity);
    let mut frontier = Frontier::with_capacity(capacity / 2);
    ledger.open(start, None, 0);
    frontier.push(start, strategy.priority(0, || h(start), weight));

    loop {
        if cancel.map_or(false, |flag| flag.load(Ordering::Relaxed)) {
            log_debug!(
                "{} search cancelled after {} expansions",
                strategy,
                ledger.closed_count()
            );
            return Outcome::Cancelled;
        }

        let Some((current, _score)) = frontier.pop_min() else {
            log_debug!(
                "{} search exhausted the Frontier after {} expansions",
                strategy,
                ledger.closed_count()
            );
            return Outcome::Unreachable;
        };

        if current == goal {
            log_debug!(
                "{} search reached the goal after {} expansions, {} Nodes discovered",
                strategy,
                ledger.closed_count(),
                ledger.discovered_count()
            );
            return Outcome::Found(ledger.reconstruct(goal));
        }

        let Some(current_cost) = ledger.cost(current) else {
            panic!("Frontier returned an undiscovered Node");
        };
        ledger.close(current);
        log_trace!("expanding slot {} (g = {}, score = {})", current, current_cost, _score);

        for &(next, edge_weight) in graph.slot_edges(current) {
            let next_cost = current_cost.saturating_add(strategy.step_cost(edge_weight));

            if !ledger.is_discovered(next) {
                ledger.open(next, Some(current), next_cost);
                frontier.push(next, strategy.priority(next_cost, || h(next), weight));
            } else if strategy.relaxes() && ledger.relax(next, current, next_cost) {
                // discovered and not closed, so it is still queued
                let rescored =
                    frontier.rescore(next, strategy.priority(next_cost, || h(next), weight));
                debug_assert!(rescored, "relaxed Node was not in the Frontier");
            }
        }
    }
}
