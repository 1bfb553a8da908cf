//! End-to-end analysis of one word: tighten → normal form → cyclic normal
//! form → alternation/extremal tests → turn graph → cycle-sum search.

use tracing::info;

use crate::error::BsResult;
use crate::group::{cyclic_normal, has_extremal_surface, is_alternating, normal_form, GroupParams};
use crate::turn_graph::{dual_edge_basis, turn_graph, Edge, TurnGraph};
use crate::word::{t_exp, t_len, tighten, Word};
use crate::xvar::{x_variable_list, EdgeDict, SearchCfg};

/// Everything computed for one word.
///
/// `graph`, `dual_basis` and `x_variables` are only filled when the cyclic
/// normal form is alternating and contains t-letters; `extremal` is false
/// otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub params: GroupParams,
    pub input: Word,
    pub tight: Word,
    pub normal: Word,
    pub cyclic: Word,
    pub t_exp: i64,
    pub t_len: usize,
    pub alternating: bool,
    pub extremal: bool,
    pub graph: Option<TurnGraph>,
    pub dual_basis: Vec<Edge>,
    pub x_variables: Vec<EdgeDict>,
}

/// Parse and validate, then run `analyze_word`.
pub fn analyze(word: &str, m: i64, l: i64, cfg: SearchCfg) -> BsResult<Analysis> {
    let g: Word = word.parse()?;
    let p = GroupParams::new(m, l)?;
    Ok(analyze_word(&g, p, cfg))
}

pub fn analyze_word(g: &Word, p: GroupParams, cfg: SearchCfg) -> Analysis {
    let tight = tighten(g);
    let normal = normal_form(&tight, p);
    let cyclic = cyclic_normal(&normal, p);
    let alternating = is_alternating(&cyclic);
    let searchable = alternating && t_len(&cyclic) > 0;
    let extremal = searchable && has_extremal_surface(&cyclic, p);
    let (graph, dual_basis, x_variables) = if searchable {
        let tg = turn_graph(&cyclic);
        let basis = dual_edge_basis(&tg);
        let xs = x_variable_list(&tg, p, cfg);
        (Some(tg), basis, xs)
    } else {
        (None, Vec::new(), Vec::new())
    };
    info!(
        word = %g,
        m = p.m(),
        l = p.l(),
        cyclic = %cyclic,
        alternating,
        extremal,
        candidates = x_variables.len(),
        "analyzed"
    );
    Analysis {
        params: p,
        input: g.clone(),
        t_exp: t_exp(&cyclic),
        t_len: t_len(&cyclic),
        tight,
        normal,
        cyclic,
        alternating,
        extremal,
        graph,
        dual_basis,
        x_variables,
    }
}
