//! Combat stat lines for the detail card.
//!
//! Values are passed through as delivered; absent values render blank.

use codex_core::ChampionStats;

/// A stat shown on the detail card, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Health.
    Hp,
    /// Mana.
    Mp,
    /// Attack damage.
    AttackDamage,
    /// Attack speed.
    AttackSpeed,
    /// Armor.
    Armor,
    /// Magic resist.
    SpellBlock,
    /// Movement speed.
    MoveSpeed,
    /// Attack range.
    AttackRange,
}

impl StatKind {
    /// Display order.
    pub const ALL: [Self; 8] = [
        Self::Hp,
        Self::Mp,
        Self::AttackDamage,
        Self::AttackSpeed,
        Self::Armor,
        Self::SpellBlock,
        Self::MoveSpeed,
        Self::AttackRange,
    ];

    /// Card label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hp => "체력 (HP)",
            Self::Mp => "마나 (MP)",
            Self::AttackDamage => "공격력",
            Self::AttackSpeed => "공격 속도",
            Self::Armor => "방어력",
            Self::SpellBlock => "마법 저항력",
            Self::MoveSpeed => "이동 속도",
            Self::AttackRange => "사거리",
        }
    }

    /// Reads this stat from a record's stats.
    #[must_use]
    pub const fn read(self, stats: &ChampionStats) -> Option<f64> {
        match self {
            Self::Hp => stats.hp,
            Self::Mp => stats.mp,
            Self::AttackDamage => stats.attackdamage,
            Self::AttackSpeed => stats.attackspeed,
            Self::Armor => stats.armor,
            Self::SpellBlock => stats.spellblock,
            Self::MoveSpeed => stats.movespeed,
            Self::AttackRange => stats.attackrange,
        }
    }
}

/// One labelled value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatLine {
    /// Which stat.
    pub kind: StatKind,
    /// Raw value, if delivered.
    pub value: Option<f64>,
}

impl StatLine {
    /// Value text; empty when absent.
    #[must_use]
    pub fn value_text(&self) -> String {
        self.value.map(|v| v.to_string()).unwrap_or_default()
    }
}

/// All eight lines in display order. Missing stats give blank lines.
#[must_use]
pub fn stat_lines(stats: Option<&ChampionStats>) -> [StatLine; 8] {
    let stats = stats.copied().unwrap_or_default();
    StatKind::ALL.map(|kind| StatLine {
        kind,
        value: kind.read(&stats),
    })
}
