//! Detail card view model.
//!
//! Everything the detail screen shows for one record, already derived:
//! portrait source, radar chart, difficulty row and stat lines.

use std::fmt;

use codex_core::ChampionRecord;
use codex_shared::Point;

use crate::difficulty::StarRating;
use crate::image::{ImageResolver, ImageSource};
use crate::radar::RadarChart;
use crate::render::RenderList;
use crate::stats::{stat_lines, StatLine};
use crate::style::Theme;

/// Where the star row sits under the chart in the combined drawing.
const STAR_ORIGIN: Point = Point::new(5.0, 95.0);
const STAR_SPACING: f64 = 9.0;

/// Derived detail card for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ChampionDetail<'a> {
    /// The record shown.
    pub record: &'a ChampionRecord,
    /// Portrait with fallback.
    pub portrait: Option<ImageSource>,
    /// Attack / magic / defense chart.
    pub radar: RadarChart,
    /// Difficulty row.
    pub difficulty: StarRating,
    /// Combat stats in display order.
    pub stats: [StatLine; 8],
}

impl<'a> ChampionDetail<'a> {
    /// Derives the card. Missing ratings and stats default, never fail.
    #[must_use]
    pub fn build(record: &'a ChampionRecord, images: &ImageResolver) -> Self {
        let info = record.info.as_ref();
        Self {
            record,
            portrait: images.portrait(&record.image),
            radar: RadarChart::from_info(info),
            difficulty: StarRating::new(record.info_or_default().difficulty),
            stats: stat_lines(record.stats.as_ref()),
        }
    }

    /// Chart plus star row as one command list.
    #[must_use]
    pub fn render(&self, theme: &Theme) -> RenderList {
        let mut list = RenderList::new();
        self.radar.render(theme, &mut list);
        self.difficulty
            .render(STAR_ORIGIN, STAR_SPACING, theme, &mut list);
        list
    }
}

/// Plain-text card for terminals.
impl fmt::Display for ChampionDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        writeln!(f, "{}", record.title.as_deref().unwrap_or_default())?;
        writeln!(
            f,
            "{} ({})",
            record.display_name(),
            record.key().unwrap_or_default()
        )?;
        if !record.tags.is_empty() {
            writeln!(f, "[{}]", record.tags.join("] ["))?;
        }
        let info = record.info_or_default();
        writeln!(
            f,
            "공격 {} / 마법 {} / 방어 {}",
            info.attack, info.magic, info.defense
        )?;
        writeln!(f, "난이도 {}", self.difficulty.to_text())?;
        for line in &self.stats {
            writeln!(f, "  {:<12} {}", line.kind.label(), line.value_text())?;
        }
        if let Some(portrait) = &self.portrait {
            writeln!(f, "portrait: {}", portrait.primary)?;
        }
        if let Some(blurb) = record.blurb.as_deref().filter(|b| !b.is_empty()) {
            writeln!(f, "\n{blurb}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_core::{ChampionInfo, ChampionStats};

    #[test]
    fn test_build_from_full_record() {
        let mut record = ChampionRecord::new("Garen", "가렌")
            .with_tags(["Fighter", "Tank"])
            .with_info(ChampionInfo {
                attack: 7,
                defense: 7,
                magic: 1,
                difficulty: 5,
            });
        record.stats = Some(ChampionStats {
            hp: Some(690.0),
            ..ChampionStats::default()
        });
        record.image.loading_image_url = Some("https://cdn/Garen_0.jpg".into());

        let detail = ChampionDetail::build(&record, &ImageResolver::default());
        assert_eq!(detail.difficulty.filled_count(), 5);
        assert_eq!(detail.stats[0].value, Some(690.0));
        assert_eq!(
            detail.portrait.as_ref().map(|p| p.primary.as_str()),
            Some("https://cdn/Garen_0.jpg")
        );

        let text = detail.to_string();
        assert!(text.contains("가렌 (Garen)"));
        assert!(text.contains("[Fighter] [Tank]"));
        assert!(text.contains("★★★★★☆☆☆☆☆"));
    }

    #[test]
    fn test_build_from_bare_record() {
        let record = ChampionRecord::new("Nobody", "무명");
        let detail = ChampionDetail::build(&record, &ImageResolver::default());
        assert_eq!(detail.difficulty.filled_count(), 0);
        assert_eq!(detail.portrait, None);
        assert!(detail.stats.iter().all(|line| line.value.is_none()));
        // chart + stars
        assert_eq!(detail.render(&Theme::default()).command_count(), 18);
    }
}
