//! Packrat memoization with left-recursion support.
//!
//! Every memoized rule application is keyed by `(rule, position)`. The first
//! application at a key runs the rule body once and stores the outcome;
//! later applications replay it, moving the cursor to the stored end.
//! Failures are stored too and stay valid for the whole parse.
//!
//! # Left recursion
//!
//! Before running a body the key gets a `Failed` seed and a
//! [`LeftRecursionFrame`] is pushed. If the body reaches the same key again
//! before consuming input, it is handed the current seed and the frame is
//! marked as left-recursive. When the body returns:
//!
//! - unmarked frame: the result is final;
//! - marked frame: the result becomes the new seed as long as it ends strictly
//!   after the previous one, and the body is re-derived against it. The first
//!   re-derivation that does not advance stops the loop and the last seed is
//!   committed.
//!
//! Frames are keyed the same way as the table, so indirect recursion
//! (`A -> B -> A` at one position) is caught exactly like direct recursion.
//!
//! A result that read the seed of a frame further out is only valid for the
//! current growth step. Such results are not cached; the dependency is passed
//! outwards until the frame that owns the seed finishes growing.

use kiwi_ir::{Alias, AugOperator, Case, DefaultedParam, ExprId, MatchKey, Name, Param, ReturnParam, StmtId};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::grammar::{Annotations, Buckets, LabelledBlock, Signature};
use crate::rule::Rule;

/// Memo table key.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MemoKey {
    pub rule: Rule,
    pub pos: usize,
}

/// Stored outcome of one rule application. A missing entry means the rule was
/// never applied at that position.
#[derive(Clone, Debug)]
pub enum MemoEntry<T> {
    Failed,
    Succeeded { value: T, end: usize },
}

/// Values that can be stored in the memo tables.
pub(crate) trait Memoizable: Clone {
    fn table(tables: &mut MemoTables) -> &mut FxHashMap<MemoKey, MemoEntry<Self>>;
}

macro_rules! memo_tables {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        /// One table per rule result type.
        #[derive(Default)]
        pub(crate) struct MemoTables {
            $($field: FxHashMap<MemoKey, MemoEntry<$ty>>,)+
        }

        impl MemoTables {
            fn len(&self) -> usize {
                0 $(+ self.$field.len())+
            }
        }

        $(
            impl Memoizable for $ty {
                #[inline]
                fn table(tables: &mut MemoTables) -> &mut FxHashMap<MemoKey, MemoEntry<Self>> {
                    &mut tables.$field
                }
            }
        )+
    };
}

memo_tables! {
    exprs: ExprId,
    expr_lists: Vec<ExprId>,
    stmts: StmtId,
    stmt_lists: Vec<StmtId>,
    aliases: Alias,
    alias_lists: Vec<Alias>,
    paths: Vec<Name>,
    annotations: Annotations,
    aug_operators: AugOperator,
    buckets: Buckets,
    labelled_blocks: LabelledBlock,
    signatures: Signature,
    params: Param,
    defaulted_params: DefaultedParam,
    return_params: ReturnParam,
    cases: Case,
    match_keys: MatchKey,
    match_key_lists: Vec<MatchKey>,
}

/// A rule being resolved at a position.
#[derive(Copy, Clone, Debug)]
pub struct LeftRecursionFrame {
    pub rule: Rule,
    pub pos: usize,
    /// Set once the rule re-entered itself at `pos`.
    pub detected: bool,
}

/// Counters collected while parsing.
#[derive(Clone, Default, Debug)]
pub struct MemoStats {
    evaluations: FxHashMap<MemoKey, u32>,
    /// Applications answered from the table.
    pub hits: u64,
    /// Applications that ran the rule body.
    pub misses: u64,
    /// Frames that turned out to be left-recursive.
    pub left_recursions: u64,
    /// Re-derivations run while growing seeds.
    pub growth_iterations: u64,
    /// Results dropped because they read a seed that was still growing.
    pub uncached_results: u64,
}

impl MemoStats {
    /// How often the body of `rule` was started fresh at `pos`. Seed-growth
    /// re-derivations are counted in `growth_iterations` instead.
    pub fn evaluations(&self, rule: Rule, pos: usize) -> u32 {
        self.evaluations
            .get(&MemoKey { rule, pos })
            .copied()
            .unwrap_or(0)
    }

    /// Largest per-key evaluation count.
    pub fn max_evaluations(&self) -> u32 {
        self.evaluations.values().copied().max().unwrap_or(0)
    }

    /// Number of distinct keys whose body ran.
    pub fn evaluated_keys(&self) -> usize {
        self.evaluations.len()
    }

    /// Every evaluated key with its count.
    pub fn iter(&self) -> impl Iterator<Item = (MemoKey, u32)> + '_ {
        self.evaluations.iter().map(|(key, count)| (*key, *count))
    }
}

/// Memo tables plus left-recursion bookkeeping for one parse.
#[derive(Default)]
pub(crate) struct MemoCache {
    tables: MemoTables,
    frames: Vec<LeftRecursionFrame>,
    active: FxHashMap<MemoKey, usize>,
    /// Lowest index of an active frame whose seed the running evaluation read.
    seed_dependency: Option<usize>,
    stats: MemoStats,
}

impl MemoCache {
    pub(crate) fn stats(&self) -> &MemoStats {
        &self.stats
    }

    pub(crate) fn into_stats(self) -> MemoStats {
        self.stats
    }

    /// Number of stored entries across all tables.
    pub(crate) fn len(&self) -> usize {
        self.tables.len()
    }

    fn depend_on(&mut self, frame: usize) {
        self.seed_dependency = Some(self.seed_dependency.map_or(frame, |d| d.min(frame)));
    }
}

/// Anything that owns a cursor position and a [`MemoCache`].
pub(crate) trait MemoHost {
    fn memo(&mut self) -> &mut MemoCache;
    fn mark(&self) -> usize;
    fn reset(&mut self, pos: usize);
}

/// Apply `rule` at the current position through the memo table.
pub(crate) fn memoize<H, T>(host: &mut H, rule: Rule, body: fn(&mut H) -> Option<T>) -> Option<T>
where
    H: MemoHost,
    T: Memoizable,
{
    let pos = host.mark();
    let key = MemoKey { rule, pos };
    let cache = host.memo();

    if let Some(entry) = T::table(&mut cache.tables).get(&key).cloned() {
        if let Some(&frame) = cache.active.get(&key) {
            cache.frames[frame].detected = true;
            cache.depend_on(frame);
            trace!(rule = rule.name(), pos, "left recursion");
        } else {
            cache.stats.hits += 1;
            trace!(rule = rule.name(), pos, "memo hit");
        }
        return replay(host, pos, entry);
    }

    cache.stats.misses += 1;
    *cache.stats.evaluations.entry(key).or_insert(0) += 1;
    trace!(rule = rule.name(), pos, "enter");
    resolve(host, key, body)
}

fn resolve<H, T>(host: &mut H, key: MemoKey, body: fn(&mut H) -> Option<T>) -> Option<T>
where
    H: MemoHost,
    T: Memoizable,
{
    let cache = host.memo();
    T::table(&mut cache.tables).insert(key, MemoEntry::Failed);
    let frame = cache.frames.len();
    cache.frames.push(LeftRecursionFrame {
        rule: key.rule,
        pos: key.pos,
        detected: false,
    });
    cache.active.insert(key, frame);
    let outer_dependency = cache.seed_dependency.take();

    let mut entry = derive(host, body);

    if host.memo().frames[frame].detected {
        host.memo().stats.left_recursions += 1;
        entry = grow(host, key, entry, body);
    }

    let cache = host.memo();
    cache.frames.pop();
    cache.active.remove(&key);
    let dependency = cache.seed_dependency.filter(|&d| d < frame);
    cache.seed_dependency = match (outer_dependency, dependency) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };

    if dependency.is_some() {
        cache.stats.uncached_results += 1;
        T::table(&mut cache.tables).remove(&key);
        trace!(rule = key.rule.name(), pos = key.pos, "depends on outer seed, not cached");
    } else {
        T::table(&mut cache.tables).insert(key, entry.clone());
    }

    replay(host, key.pos, entry)
}

/// Seed-growing loop. `first` is the derivation made against a failed seed.
fn grow<H, T>(
    host: &mut H,
    key: MemoKey,
    first: MemoEntry<T>,
    body: fn(&mut H) -> Option<T>,
) -> MemoEntry<T>
where
    H: MemoHost,
    T: Memoizable,
{
    let mut seed = MemoEntry::Failed;
    let mut seed_end = key.pos;
    let mut candidate = first;

    loop {
        match candidate {
            MemoEntry::Succeeded { end, .. } if end > seed_end => {
                seed_end = end;
                seed = candidate;
                let cache = host.memo();
                cache.stats.growth_iterations += 1;
                T::table(&mut cache.tables).insert(key, seed.clone());
                debug!(rule = key.rule.name(), pos = key.pos, end, "seed grew");
                host.reset(key.pos);
                candidate = derive(host, body);
            }
            _ => break,
        }
    }

    debug!(rule = key.rule.name(), pos = key.pos, end = seed_end, "seed committed");
    seed
}

fn derive<H, T>(host: &mut H, body: fn(&mut H) -> Option<T>) -> MemoEntry<T>
where
    H: MemoHost,
{
    match body(host) {
        Some(value) => MemoEntry::Succeeded {
            value,
            end: host.mark(),
        },
        None => MemoEntry::Failed,
    }
}

fn replay<H: MemoHost, T>(host: &mut H, pos: usize, entry: MemoEntry<T>) -> Option<T> {
    match entry {
        MemoEntry::Succeeded { value, end } => {
            host.reset(end);
            Some(value)
        }
        MemoEntry::Failed => {
            host.reset(pos);
            None
        }
    }
}
