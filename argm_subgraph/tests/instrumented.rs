//! Observes the clone/extend/rollback protocol through a recording state.

mod common;

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use rstest::rstest;

use argm_common::{MatchKind, NodeId, NodePair};
use argm_graph::Graph;
use argm_subgraph::{
    MatchState, MatchView, Vf2State, find_first, visit_all, visit_all_iterative,
};

use common::setup_test_logging;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Event {
    Clone,
    Add,
    Backtrack,
    Visit,
}

type Log = Rc<RefCell<Vec<Event>>>;

struct Recording<'g> {
    inner: Vf2State<'g, (), ()>,
    log: Log,
}

impl Clone for Recording<'_> {
    fn clone(&self) -> Self {
        self.log.borrow_mut().push(Event::Clone);
        Self {
            inner: self.inner.clone(),
            log: Rc::clone(&self.log),
        }
    }
}

impl MatchState for Recording<'_> {
    fn is_goal(&self) -> bool {
        self.inner.is_goal()
    }

    fn is_dead(&self) -> bool {
        self.inner.is_dead()
    }

    fn next_pair(&self, prev: Option<NodePair>) -> Option<NodePair> {
        self.inner.next_pair(prev)
    }

    fn is_feasible_pair(&self, pair: NodePair) -> bool {
        self.inner.is_feasible_pair(pair)
    }

    fn add_pair(&mut self, pair: NodePair) {
        self.log.borrow_mut().push(Event::Add);
        self.inner.add_pair(pair);
    }

    fn backtrack(&mut self) {
        self.log.borrow_mut().push(Event::Backtrack);
        self.inner.backtrack();
    }

    fn core_len(&self) -> usize {
        self.inner.core_len()
    }

    fn core_set(&self, pattern: &mut [NodeId], target: &mut [NodeId]) {
        self.inner.core_set(pattern, target);
    }

    fn node_counts(&self) -> (usize, usize) {
        self.inner.node_counts()
    }
}

fn k4() -> Graph {
    Graph::undirected(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap()
}

fn count(log: &[Event], event: Event) -> usize {
    log.iter().filter(|&&e| e == event).count()
}

fn stop_after(log: Log, limit: usize) -> impl FnMut(MatchView<'_>) -> ControlFlow<()> {
    let mut seen = 0;
    move |_| {
        log.borrow_mut().push(Event::Visit);
        seen += 1;
        if seen == limit {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

fn run(state: &Recording<'_>, iterative: bool, limit: usize) -> usize {
    let visitor = stop_after(Rc::clone(&state.log), limit);
    if iterative {
        visit_all_iterative(state, visitor)
    } else {
        visit_all(state, visitor)
    }
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(23)]
fn early_stop_only_rolls_back(
    #[case] limit: usize,
    #[values(false, true)] iterative: bool,
) {
    setup_test_logging();
    let g = k4();
    let state = Recording {
        inner: Vf2State::new(&g, &g, MatchKind::Isomorphism),
        log: Log::default(),
    };

    assert_eq!(run(&state, iterative, limit), limit);

    let log = state.log.borrow();
    assert_eq!(count(&log, Event::Visit), limit);
    let last_visit = log
        .iter()
        .rposition(|&e| e == Event::Visit)
        .expect("at least one visit");
    assert!(
        log[last_visit + 1..].iter().all(|&e| e == Event::Backtrack),
        "state mutated after stop: {:?}",
        &log[last_visit + 1..]
    );
    assert_eq!(count(&log, Event::Add), count(&log, Event::Backtrack));
    assert_eq!(count(&log, Event::Clone), count(&log, Event::Add));
    assert_eq!(state.core_len(), 0);
}

#[rstest]
fn exhaustive_search_balances_every_branch(#[values(false, true)] iterative: bool) {
    let g = k4();
    let state = Recording {
        inner: Vf2State::new(&g, &g, MatchKind::Isomorphism),
        log: Log::default(),
    };

    assert_eq!(run(&state, iterative, usize::MAX), 24);
    let log = state.log.borrow();
    assert_eq!(count(&log, Event::Visit), 24);
    assert_eq!(count(&log, Event::Add), count(&log, Event::Backtrack));
    assert_eq!(log.last(), Some(&Event::Backtrack));
}

#[test]
fn recursive_and_iterative_protocols_match() {
    let g = k4();
    let logs: Vec<Vec<Event>> = [false, true]
        .into_iter()
        .map(|iterative| {
            let state = Recording {
                inner: Vf2State::new(&g, &g, MatchKind::Isomorphism),
                log: Log::default(),
            };
            run(&state, iterative, 7);
            state.log.take()
        })
        .collect();
    assert_eq!(logs[0], logs[1]);
}

#[test]
fn find_first_rolls_back_on_success() {
    let g = k4();
    let state = Recording {
        inner: Vf2State::new(&g, &g, MatchKind::Isomorphism),
        log: Log::default(),
    };
    let mut p = vec![NodeId::default(); 4];
    let mut t = vec![NodeId::default(); 4];

    assert_eq!(find_first(&state, &mut p, &mut t), Some(4));
    let log = state.log.borrow();
    assert_eq!(count(&log, Event::Add), 4);
    assert_eq!(count(&log, Event::Backtrack), 4);
    assert_eq!(&p, &[0, 1, 2, 3].map(NodeId::new));
}

#[test]
fn no_match_visits_nothing() {
    let tri = Graph::undirected(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
    let path = Graph::undirected(3, &[(0, 1), (1, 2)]).unwrap();
    let state = Recording {
        inner: Vf2State::new(&tri, &path, MatchKind::Isomorphism),
        log: Log::default(),
    };

    assert_eq!(run(&state, false, usize::MAX), 0);
    let mut p = vec![NodeId::default(); 3];
    let mut t = vec![NodeId::default(); 3];
    assert_eq!(find_first(&state, &mut p, &mut t), None);

    let log = state.log.borrow();
    assert_eq!(count(&log, Event::Visit), 0);
    assert_eq!(count(&log, Event::Add), count(&log, Event::Backtrack));
}
