//! Profile text display

use std::io::{self, Write};

use pitchscout_analysis::context::{PlayerProfile, StatLine};

const BAR_WIDTH: usize = 20;

pub(super) fn write_profile<W>(w: &mut W, profile: &PlayerProfile<'_>) -> io::Result<()>
where
    W: Write,
{
    let id = profile.identity;
    writeln!(w, "{} ({}, {})", id.name, id.club, id.competition)?;
    writeln!(
        w,
        "  Position: {} ({})  Nation: {}  Age: {}  Minutes: {:.0}",
        id.position,
        id.position_label,
        id.nation,
        id.age.map_or("N/A".to_string(), |a| a.to_string()),
        profile.minutes,
    )?;
    writeln!(w)?;

    writeln!(w, "Category scores:")?;
    for score in &profile.scores {
        writeln!(w, "  {:<12} {:>4}", score.category.to_string(), score.score)?;
    }
    writeln!(w)?;

    writeln!(w, "Key stats (vs. {}s):", id.position.name())?;
    write_stat_table(w, &profile.key_stats)?;
    writeln!(w)?;

    writeln!(w, "All stats (vs. {}s):", id.position.name())?;
    write_stat_table(w, &profile.all_stats)?;
    writeln!(w)?;

    writeln!(w, "Touches:")?;
    for zone in &profile.touches {
        writeln!(w, "  {:<20} {:>8.1}", zone.column, zone.share)?;
    }
    Ok(())
}

fn write_stat_table<W>(w: &mut W, lines: &[StatLine]) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "  {:<20} {:>10} {:>6}  ", "Stat", "Value", "Pct")?;
    // label(20) + value(10) + pct(6) + bar(20) + spaces(4)
    writeln!(w, "  {}", "-".repeat(60))?;
    for line in lines {
        writeln!(
            w,
            "  {:<20} {:>10.2} {:>6.1}  {}",
            line.column,
            line.value,
            line.percentile,
            percentile_bar(line.percentile),
        )?;
    }
    Ok(())
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn percentile_bar(percentile: f64) -> String {
    let filled = ((percentile.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_bar_width() {
        assert_eq!(percentile_bar(0.0), ".".repeat(BAR_WIDTH));
        assert_eq!(percentile_bar(100.0), "#".repeat(BAR_WIDTH));
        assert_eq!(percentile_bar(50.0), format!("{}{}", "#".repeat(10), ".".repeat(10)));
        assert_eq!(percentile_bar(250.0).len(), BAR_WIDTH);
    }
}
