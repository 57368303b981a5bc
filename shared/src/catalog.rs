//! Static catalog of internal skills
//!
//! The catalog is read-only and built once on first access. Pools for a draw
//! are always derived from it through [`select`].

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::types::{Item, ItemKind};

static CATALOG: OnceLock<Vec<Item>> = OnceLock::new();

const ENTRIES: &[(&str, &str, ItemKind)] = &[
    ("bxj", "冰心诀", ItemKind::Internal),
    ("hjy", "花间游", ItemKind::Internal),
    ("dj", "毒经", ItemKind::Internal),
    ("mw", "莫问", ItemKind::Internal),
    ("wf", "无方", ItemKind::Internal),
    ("yjj", "易筋经", ItemKind::Internal),
    ("fysj", "焚影圣诀", ItemKind::Internal),
    ("zxg", "紫霞功", ItemKind::Internal),
    ("tlgd", "天罗诡道", ItemKind::Internal),
    ("txj", "太玄经", ItemKind::Internal),
    ("ztg", "周天功", ItemKind::Internal),
    ("yly", "幽罗引", ItemKind::Internal),
    ("axzy", "傲血战意", ItemKind::External),
    ("fsj", "分山劲", ItemKind::External),
    ("txjy", "太虚剑意", ItemKind::External),
    ("jyj", "惊羽诀", ItemKind::External),
    ("wsj", "问水诀", ItemKind::External),
    ("xcj", "笑尘诀", ItemKind::External),
    ("baj", "北傲诀", ItemKind::External),
    ("lhj", "凌海诀", ItemKind::External),
    ("ylj", "隐龙诀", ItemKind::External),
    ("gfj", "孤锋诀", ItemKind::External),
    ("shxj", "山海心诀", ItemKind::External),
    ("ysxj", "云裳心经", ItemKind::Healer),
    ("ljyd", "离经易道", ItemKind::Healer),
    ("btj", "补天诀", ItemKind::Healer),
    ("xz", "相知", ItemKind::Healer),
    ("ls", "灵素", ItemKind::Healer),
];

/// Every catalog item: internal first, then external, then healers
pub fn all() -> &'static [Item] {
    CATALOG.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|(id, name, kind)| Item::new(id, name, *kind, &format!("/xinfa/{name}.png")))
            .collect()
    })
}

/// Every catalog identifier in catalog order
pub fn all_ids() -> Vec<String> {
    all().iter().map(|item| item.id.clone()).collect()
}

/// Items of one kind in catalog order
pub fn by_kind(kind: ItemKind) -> Vec<&'static Item> {
    all().iter().filter(|item| item.kind == kind).collect()
}

pub fn find(id: &str) -> Option<&'static Item> {
    all().iter().find(|item| item.id == id)
}

/// Build a draw pool from selected identifiers.
///
/// The pool keeps catalog order regardless of the order of `ids`; unknown
/// identifiers are skipped.
pub fn select<S: AsRef<str>>(ids: &[S]) -> Vec<Item> {
    let wanted: HashSet<&str> = ids.iter().map(|id| id.as_ref()).collect();
    all()
        .iter()
        .filter(|item| wanted.contains(item.id.as_str()))
        .cloned()
        .collect()
}
