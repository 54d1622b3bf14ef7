use crate::error::Result;
use crate::models::activity::{ActivityEntry, ActivitySummaryEntry};
use crate::models::user::UserProfile;
use printpdf::path::PaintMode;
use printpdf::*;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;

// Approximate advance width of builtin Helvetica, used for centering and
// right-aligning without embedded font metrics.
const PT_TO_MM: f32 = 0.3528;
const AVG_GLYPH_EM: f32 = 0.5;

pub struct ReportService;

impl ReportService {
    /// Render the fixed-layout activity report for one user. The caller has
    /// already recorded the pdf_download activity and fetched the data.
    pub fn generate_activity_report(
        user: &UserProfile,
        activities: &[ActivityEntry],
        summary: &[ActivitySummaryEntry],
    ) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            format!("Activity Report - {}", user.name),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);

        // ── Color palette ──
        let heading_blue = Color::Rgb(Rgb::new(0.118, 0.251, 0.686, None)); // #1e40af
        let muted_gray = Color::Rgb(Rgb::new(0.420, 0.447, 0.502, None)); // #6b7280
        let header_band = Color::Rgb(Rgb::new(0.953, 0.957, 0.965, None)); // #f3f4f6
        let alt_row = Color::Rgb(Rgb::new(0.976, 0.980, 0.984, None)); // #f9fafb
        let black = Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None));

        let mut y = PAGE_HEIGHT_MM - 22.0;

        // ── Title ──
        let title = "User Activity Report";
        layer.set_fill_color(heading_blue.clone());
        layer.use_text(title, 22.0, Mm(centered_x(title, 22.0)), Mm(y), &font_bold);
        y -= 12.0;

        // ── Generation timestamp and report window ──
        let now = chrono::Utc::now();
        let window_start = now
            .checked_sub_months(chrono::Months::new(1))
            .unwrap_or(now);
        let generated = format!("Generated on: {}", now.format("%Y-%m-%d %H:%M UTC"));
        let window = format!(
            "Report window: {} - {}",
            window_start.format("%Y-%m-%d"),
            now.format("%Y-%m-%d")
        );
        layer.set_fill_color(muted_gray.clone());
        layer.use_text(
            generated.as_str(),
            9.0,
            Mm(right_x(&generated, 9.0)),
            Mm(y),
            &font,
        );
        y -= 5.0;
        layer.use_text(window.as_str(), 9.0, Mm(right_x(&window, 9.0)), Mm(y), &font);
        y -= 12.0;

        // ── User info block ──
        layer.set_fill_color(heading_blue.clone());
        layer.use_text("User Information", 14.0, Mm(MARGIN_MM), Mm(y), &font_bold);
        y -= 8.0;
        layer.set_fill_color(black.clone());
        for line in [
            format!("Name: {}", user.name),
            format!("Email: {}", user.email),
            format!("Role: {}", user.role),
        ] {
            layer.use_text(line.as_str(), 11.0, Mm(MARGIN_MM), Mm(y), &font);
            y -= 6.0;
        }
        y -= 6.0;

        // ── Activity summary ──
        layer.set_fill_color(heading_blue.clone());
        layer.use_text("Activity Summary", 14.0, Mm(MARGIN_MM), Mm(y), &font_bold);
        y -= 8.0;
        for entry in summary {
            layer.set_fill_color(black.clone());
            layer.use_text(
                format!("{}: {} times", entry.activity_type, entry.activity_count),
                11.0,
                Mm(MARGIN_MM),
                Mm(y),
                &font,
            );
            y -= 5.0;
            layer.set_fill_color(muted_gray.clone());
            layer.use_text(
                format!(
                    "Last activity: {}",
                    entry.last_updated.format("%Y-%m-%d %H:%M UTC")
                ),
                9.0,
                Mm(MARGIN_MM),
                Mm(y),
                &font,
            );
            y -= 7.0;
        }
        y -= 6.0;

        // ── Recent activity table ──
        layer.set_fill_color(heading_blue.clone());
        layer.use_text("Recent Activities", 14.0, Mm(MARGIN_MM), Mm(y), &font_bold);
        y -= 9.0;

        let col_type = MARGIN_MM + 2.0;
        let col_time = 90.0;
        let col_details = 140.0;
        let table_right = PAGE_WIDTH_MM - MARGIN_MM;

        layer.set_fill_color(header_band);
        layer.add_rect(
            Rect::new(Mm(MARGIN_MM), Mm(y - 2.5), Mm(table_right), Mm(y + 5.5))
                .with_mode(PaintMode::Fill),
        );
        layer.set_fill_color(heading_blue);
        layer.use_text("Activity Type", 11.0, Mm(col_type), Mm(y), &font_bold);
        layer.use_text("Timestamp", 11.0, Mm(col_time), Mm(y), &font_bold);
        layer.use_text("Details", 11.0, Mm(col_details), Mm(y), &font_bold);
        y -= 8.0;

        for (idx, activity) in activities.iter().enumerate() {
            if idx % 2 == 0 {
                layer.set_fill_color(alt_row.clone());
                layer.add_rect(
                    Rect::new(Mm(MARGIN_MM), Mm(y - 2.5), Mm(table_right), Mm(y + 4.5))
                        .with_mode(PaintMode::Fill),
                );
            }
            layer.set_fill_color(black.clone());
            layer.use_text(
                activity.activity_type.as_str(),
                10.0,
                Mm(col_type),
                Mm(y),
                &font,
            );
            layer.use_text(
                activity
                    .activity_timestamp
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
                10.0,
                Mm(col_time),
                Mm(y),
                &font,
            );
            layer.use_text(
                activity.details.as_deref().unwrap_or("-"),
                10.0,
                Mm(col_details),
                Mm(y),
                &font,
            );
            y -= 7.0;
        }

        let bytes = doc.save_to_bytes()?;
        Ok(bytes)
    }
}

fn text_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVG_GLYPH_EM * PT_TO_MM
}

fn centered_x(text: &str, font_size: f32) -> f32 {
    ((PAGE_WIDTH_MM - text_width_mm(text, font_size)) / 2.0).max(MARGIN_MM)
}

fn right_x(text: &str, font_size: f32) -> f32 {
    (PAGE_WIDTH_MM - MARGIN_MM - text_width_mm(text, font_size)).max(MARGIN_MM)
}
