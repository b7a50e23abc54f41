//! Layout and rendering.
//!
//! Pure functions of the app state; nothing in here mutates anything.

use crate::app::{App, CatalogFocus, FilterField, LoadState, NoticeKind, Page};
use crate::form::FormField;
use crate::theme::Palette;
use propout_core::{MediaKind, Property};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

const PROMO_LINE: &str = "Valentine Special: Get 50% OFF all bookings until February 27th!";
const LOADING_LINE: &str = "Finding the best spots...";
const LOAD_FAILED_LINE: &str = "Something went wrong. Please try again.";

const AMENITIES: [(&str, &str); 8] = [
    ("High-Speed WiFi", "Unlimited fiber internet"),
    ("Smart TV", "Netflix & cable included"),
    ("Air Conditioning", "Climate control in all rooms"),
    ("Free Parking", "Secure covered parking"),
    ("24/7 Security", "CCTV & security personnel"),
    ("Fully Equipped Kitchen", "Modern appliances"),
    ("Laundry", "Washer & dryer in-unit"),
    ("Fitness Center", "Access to gym facilities"),
];

const HOUSE_RULES: [&str; 6] = [
    "Check-in: 2:00 PM | Check-out: 12:00 PM",
    "No smoking inside apartments",
    "No parties or events without prior approval",
    "Pets allowed with prior arrangement",
    "Quiet hours: 10:00 PM - 8:00 AM",
    "Maximum occupancy must be respected",
];

pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base_style()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Promo banner
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Page body
            Constraint::Length(3),  // Status bar
            Constraint::Length(1),  // Footer shortcuts
        ])
        .split(area);

    render_banner(frame, &palette, chunks[0]);
    render_header(frame, app, &palette, chunks[1]);

    match app.page {
        Page::Home => render_home(frame, app, &palette, chunks[2]),
        Page::Properties => render_properties(frame, app, &palette, chunks[2]),
        Page::Detail => render_detail(frame, app, &palette, chunks[2]),
    }

    render_status_bar(frame, app, &palette, chunks[3]);
    render_footer(frame, app, &palette, chunks[4]);

    if app.booking.is_open {
        render_booking_dialog(frame, app, &palette);
    }
    if app.show_help {
        render_help_overlay(frame, &palette);
    }
}

fn render_banner(frame: &mut Frame, palette: &Palette, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled("♥ ", palette.accent_style()),
        Span::styled(PROMO_LINE, Style::default().fg(palette.text_primary)),
        Span::styled(" ♥", palette.accent_style()),
    ]))
    .style(Style::default().bg(palette.bg_secondary))
    .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

fn render_header(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(area);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(" Prop", palette.primary_style().add_modifier(Modifier::BOLD)),
        Span::styled("Out", palette.accent_style().add_modifier(Modifier::BOLD)),
        Span::styled(" Shortlets", palette.muted_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(brand, chunks[0]);

    let nav_item = |label: &str, page: Page| {
        if app.page == page {
            Span::styled(format!(" {label} "), palette.selection_style())
        } else {
            Span::styled(format!(" {label} "), palette.muted_style())
        }
    };
    let nav = Paragraph::new(Line::from(vec![
        nav_item("[1] Home", Page::Home),
        Span::raw(" "),
        nav_item("[2] Properties", Page::Properties),
        Span::raw("  "),
        Span::styled("Book Now: press b", palette.accent_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border)),
    )
    .alignment(Alignment::Right);
    frame.render_widget(nav, chunks[1]);
}

// ------------------------------------------------------------------- home

fn render_home(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),  // Hero
            Constraint::Length(8),  // Featured apartments
            Constraint::Min(10),    // Amenities, location, house rules
            Constraint::Length(4),  // Booking CTA
        ])
        .split(area);

    render_hero(frame, palette, chunks[0]);
    render_featured(frame, app, palette, chunks[1]);
    render_home_info(frame, palette, chunks[2]);
    render_booking_cta(frame, palette, chunks[3]);
}

fn render_hero(frame: &mut Frame, palette: &Palette, area: Rect) {
    let block = titled_block(palette, "WELCOME", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "♥ Valentine Special Offer",
            palette.accent_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Premium Shortlet Apartments in Abuja",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Beautiful, fully-furnished apartments for business travelers, couples and organizations.",
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("★ 4.9 Rating", palette.highlight_style()),
            Span::raw("    "),
            Span::styled("Prime Locations", palette.info_style()),
            Span::raw("    "),
            Span::styled("Fully Serviced", palette.success_style()),
        ]),
        Line::from(vec![
            Span::styled("[b]", palette.shortcut_key_style()),
            Span::styled(" Book Now - 50% Off    ", palette.shortcut_desc_style()),
            Span::styled("[2]", palette.shortcut_key_style()),
            Span::styled(" View Apartments", palette.shortcut_desc_style()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_featured(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let block = titled_block(palette, "FEATURED APARTMENTS", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.featured {
        LoadState::Idle | LoadState::Loading => {
            render_centered_note(frame, inner, LOADING_LINE, palette.muted_style())
        }
        LoadState::Failed => {
            render_centered_note(frame, inner, LOAD_FAILED_LINE, palette.error_style())
        }
        LoadState::Ready(properties) if properties.is_empty() => render_centered_note(
            frame,
            inner,
            "No apartments are listed right now.",
            palette.muted_style(),
        ),
        LoadState::Ready(properties) => {
            let count = properties.len().min(3).max(1) as u32;
            let constraints: Vec<Constraint> =
                (0..count).map(|_| Constraint::Ratio(1, count)).collect();
            let cards = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(inner);
            for (index, property) in properties.iter().take(count as usize).enumerate() {
                let selected = index == app.featured_selected;
                render_property_card(frame, palette, cards[index], property, selected);
            }
        }
    }
}

fn render_property_card(
    frame: &mut Frame,
    palette: &Palette,
    area: Rect,
    property: &Property,
    selected: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(palette.border_style(selected))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title_style = if selected {
        palette.selection_style()
    } else {
        palette.primary_style().add_modifier(Modifier::BOLD)
    };
    let amenity = property
        .amenities
        .first()
        .map(String::as_str)
        .unwrap_or("Fully serviced");
    let (tag, tag_style) = media_tag(property, palette);
    let title_width = (inner.width as usize).saturating_sub(6);
    let lines = vec![
        Line::from(vec![
            Span::styled(tag, tag_style),
            Span::raw(" "),
            Span::styled(truncate(&property.title, title_width), title_style),
        ]),
        Line::from(vec![
            Span::styled(naira(property.price_per_night), palette.price_style()),
            Span::styled(" / night", palette.muted_style()),
        ]),
        Line::from(vec![
            Span::styled(property.status.label(), palette.status_style(property.status)),
            Span::styled(
                format!("  up to {} guests", property.max_guests),
                palette.muted_style(),
            ),
        ]),
        Line::from(Span::styled(
            truncate(amenity, inner.width as usize),
            Style::default().fg(palette.text_secondary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_home_info(frame: &mut Frame, palette: &Palette, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let block = titled_block(palette, "PREMIUM AMENITIES", false);
    let inner = block.inner(columns[0]);
    frame.render_widget(block, columns[0]);
    let amenity_lines: Vec<Line> = AMENITIES
        .iter()
        .map(|(label, desc)| {
            Line::from(vec![
                Span::styled("• ", palette.primary_style()),
                Span::styled(*label, Style::default().fg(palette.text_primary)),
                Span::styled(format!("  {desc}"), palette.muted_style()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(amenity_lines), inner);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(columns[1]);

    let block = titled_block(palette, "PRIME LOCATION IN ABUJA", false);
    let inner = block.inner(right[0]);
    frame.render_widget(block, right[0]);
    let location_lines = vec![
        Line::from(Span::styled(
            "10 mins to Central Business District",
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(Span::styled(
            "15 mins to Nnamdi Azikiwe International Airport",
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(Span::styled(
            "Walking distance to major banks & restaurants",
            Style::default().fg(palette.text_secondary),
        )),
    ];
    frame.render_widget(Paragraph::new(location_lines), inner);

    let block = titled_block(palette, "HOUSE RULES", false);
    let inner = block.inner(right[1]);
    frame.render_widget(block, right[1]);
    let rule_lines: Vec<Line> = HOUSE_RULES
        .iter()
        .map(|rule| {
            Line::from(vec![
                Span::styled("• ", palette.accent_style()),
                Span::styled(*rule, palette.muted_style()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(rule_lines), inner);
}

fn render_booking_cta(frame: &mut Frame, palette: &Palette, area: Rect) {
    let block = titled_block(palette, "BOOK YOUR STAY OR SCHEDULE A PREVIEW", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = vec![
        Line::from(vec![
            Span::styled("Press ", palette.muted_style()),
            Span::styled("[b]", palette.shortcut_key_style()),
            Span::styled(
                " anywhere to open the booking form. We'll get back to you within 24 hours.",
                palette.muted_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Prefer to reach us directly?  ", palette.muted_style()),
            Span::styled("+234 907 474 3062", palette.info_style()),
            Span::styled("  |  ", palette.muted_style()),
            Span::styled("bookings@mypropout.com", palette.info_style()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

// -------------------------------------------------------------- properties

fn render_properties(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(40)])
        .split(area);

    render_filter_sidebar(frame, app, palette, chunks[0]);
    render_catalog(frame, app, palette, chunks[1]);
}

fn render_filter_sidebar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let focused = app.catalog_focus == CatalogFocus::Filters;
    let block = titled_block(palette, "FILTERS", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = [
        (FilterField::Search, app.filters.search.value()),
        (FilterField::MinPrice, app.filters.min_price.value()),
        (FilterField::MaxPrice, app.filters.max_price.value()),
        (FilterField::Guests, app.filters.guests.value()),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (field, value) in fields {
        let selected = focused && app.filters.focus == field;
        lines.push(Line::from(Span::styled(
            field.label(),
            if selected {
                palette.primary_style().add_modifier(Modifier::BOLD)
            } else {
                palette.muted_style()
            },
        )));
        let shown = if value.is_empty() && !selected {
            Span::styled("-", palette.muted_style())
        } else {
            Span::styled(value.to_string(), palette.input_style(selected))
        };
        lines.push(Line::from(vec![
            Span::styled("> ", palette.primary_style()),
            shown,
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("[Enter]", palette.shortcut_key_style()),
        Span::styled(" Apply  ", palette.shortcut_desc_style()),
        Span::styled("[x]", palette.shortcut_key_style()),
        Span::styled(" Clear", palette.shortcut_desc_style()),
    ]));
    frame.render_widget(Paragraph::new(lines), inner);

    if focused {
        let index = match app.filters.focus {
            FilterField::Search => 0,
            FilterField::MinPrice => 1,
            FilterField::MaxPrice => 2,
            FilterField::Guests => 3,
        };
        let cursor = match app.filters.focus {
            FilterField::Search => app.filters.search.cursor(),
            FilterField::MinPrice => app.filters.min_price.cursor(),
            FilterField::MaxPrice => app.filters.max_price.cursor(),
            FilterField::Guests => app.filters.guests.cursor(),
        };
        frame.set_cursor_position((
            inner.x + 2 + cursor as u16,
            inner.y + (index * 3 + 1) as u16,
        ));
    }
}

fn render_catalog(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let focused = app.catalog_focus == CatalogFocus::List;
    let title = match app.catalog.ready() {
        Some(properties) => format!("PROPERTIES ({})", properties.len()),
        None => "PROPERTIES".to_string(),
    };
    let block = titled_block(palette, &title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.catalog {
        LoadState::Idle | LoadState::Loading => {
            render_centered_note(frame, inner, LOADING_LINE, palette.muted_style())
        }
        LoadState::Failed => {
            render_centered_note(frame, inner, LOAD_FAILED_LINE, palette.error_style())
        }
        LoadState::Ready(properties) if properties.is_empty() => render_centered_note(
            frame,
            inner,
            "No properties found matching your criteria. Press x to clear all filters.",
            palette.muted_style(),
        ),
        LoadState::Ready(properties) => {
            let rows_per_item = 3usize;
            let visible = (inner.height as usize / rows_per_item).max(1);
            let skip = app
                .catalog_selected
                .saturating_sub(visible.saturating_sub(1));
            let items: Vec<ListItem> = properties
                .iter()
                .enumerate()
                .skip(skip)
                .take(visible)
                .map(|(index, property)| {
                    catalog_item(palette, property, index == app.catalog_selected)
                })
                .collect();
            frame.render_widget(List::new(items), inner);
        }
    }
}

fn catalog_item<'a>(palette: &Palette, property: &'a Property, selected: bool) -> ListItem<'a> {
    let (tag, tag_style) = media_tag(property, palette);
    let title_style = if selected {
        palette.selection_style()
    } else {
        palette.primary_style().add_modifier(Modifier::BOLD)
    };
    let amenities = match property.amenities.len() {
        0 => String::new(),
        1 | 2 => property.amenities.join(", "),
        more => format!("{} +{}", property.amenities[..2].join(", "), more - 2),
    };
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(tag, tag_style),
            Span::raw(" "),
            Span::styled(format!("{:<34}", truncate(&property.title, 34)), title_style),
            Span::styled(
                format!("{:>10}", naira(property.price_per_night)),
                palette.price_style(),
            ),
            Span::styled("/night  ", palette.muted_style()),
            Span::styled(property.status.label(), palette.status_style(property.status)),
        ]),
        Line::from(vec![
            Span::raw("      "),
            Span::styled(property.address.as_str(), palette.muted_style()),
            Span::styled(
                if amenities.is_empty() {
                    String::new()
                } else {
                    format!("  |  {amenities}")
                },
                Style::default().fg(palette.text_secondary),
            ),
        ]),
        Line::from(""),
    ])
}

// ------------------------------------------------------------------ detail

fn render_detail(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    match &app.detail {
        LoadState::Idle | LoadState::Loading => {
            let block = titled_block(palette, "PROPERTY", false);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_centered_note(frame, inner, "Loading property...", palette.muted_style());
        }
        LoadState::Failed => {
            let block = titled_block(palette, "PROPERTY", false);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Property not found",
                    Style::default()
                        .fg(palette.text_primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "The property you are looking for does not exist or has been removed.",
                    palette.muted_style(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("[Esc]", palette.shortcut_key_style()),
                    Span::styled(" Back to Properties", palette.shortcut_desc_style()),
                ]),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                inner,
            );
        }
        LoadState::Ready(property) => render_detail_ready(frame, palette, area, property),
    }
}

fn render_detail_ready(frame: &mut Frame, palette: &Palette, area: Rect, property: &Property) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(46), Constraint::Length(34)])
        .split(area);

    let block = titled_block(palette, &property.title.to_uppercase(), false);
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(gallery_line(property, palette));
    lines.push(Line::from(vec![
        Span::styled(property.address.as_str(), Style::default().fg(palette.text_secondary)),
        Span::styled(
            format!("   up to {} guests   ", property.max_guests),
            palette.muted_style(),
        ),
        Span::styled(property.status.label(), palette.status_style(property.status)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "About this space",
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    )));
    let width = inner.width.saturating_sub(2).max(20) as usize;
    for wrapped in textwrap::wrap(&property.description, width) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            palette.muted_style(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Amenities",
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    )));
    if property.amenities.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask us about this apartment's amenities.",
            palette.muted_style(),
        )));
    }
    for amenity in &property.amenities {
        lines.push(Line::from(vec![
            Span::styled("✓ ", palette.success_style()),
            Span::styled(amenity.as_str(), Style::default().fg(palette.text_secondary)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    render_detail_sidebar(frame, palette, chunks[1], property);
}

fn render_detail_sidebar(frame: &mut Frame, palette: &Palette, area: Rect, property: &Property) {
    let block = titled_block(palette, "RESERVE", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let book_line = if property.status.is_bookable() {
        Line::from(vec![
            Span::styled("[b]", palette.shortcut_key_style()),
            Span::styled(" Book Now", palette.success_style().add_modifier(Modifier::BOLD)),
        ])
    } else {
        Line::from(Span::styled("Currently Unavailable", palette.muted_style()))
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(naira(property.price_per_night), palette.price_style()),
            Span::styled(" / night", palette.muted_style()),
        ]),
        Line::from(Span::styled("50% VALENTINE OFF", palette.accent_style())),
        Line::from(""),
        book_line,
        Line::from(""),
        Line::from(Span::styled(
            "You won't be charged yet.",
            palette.muted_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Esc]", palette.shortcut_key_style()),
            Span::styled(" Back to search", palette.shortcut_desc_style()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn gallery_line<'a>(property: &'a Property, palette: &Palette) -> Line<'a> {
    if property.media.is_empty() {
        return Line::from(Span::styled("[ no media yet ]", palette.muted_style()));
    }
    let mut spans: Vec<Span> = Vec::new();
    for item in property.media.iter().take(4) {
        let style = match item.kind {
            MediaKind::Image => palette.info_style(),
            MediaKind::Video => palette.accent_style(),
        };
        spans.push(Span::styled(format!("[{}] ", item.kind.tag()), style));
    }
    if property.media.len() > 4 {
        spans.push(Span::styled(
            format!("+{} more", property.media.len() - 4),
            palette.muted_style(),
        ));
    }
    Line::from(spans)
}

// ------------------------------------------------------------------ dialog

fn render_booking_dialog(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let popup = centered_rect(area, 64, 22);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("BOOKING REQUEST", palette.title_style(true)),
            Span::styled(" - fields marked * are required ", palette.muted_style()),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(palette.border_style(true))
        .padding(Padding::new(2, 2, 1, 0))
        .style(Style::default().bg(palette.bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let form = &app.form;
    let fields = [
        FormField::FullName,
        FormField::Email,
        FormField::Phone,
        FormField::Apartment,
        FormField::CheckIn,
        FormField::CheckOut,
        FormField::Guests,
        FormField::Message,
    ];

    let mut lines: Vec<Line> = Vec::new();
    for field in fields {
        let focused = form.focus == field;
        let marker = if focused { "> " } else { "  " };
        let required = if field.is_required() { "*" } else { " " };
        let value: String = match field {
            FormField::FullName => form.full_name.value().to_string(),
            FormField::Email => form.email.value().to_string(),
            FormField::Phone => form.phone.value().to_string(),
            FormField::Apartment => form.apartment_title.clone(),
            FormField::CheckIn => form.check_in.value().to_string(),
            FormField::CheckOut => form.check_out.value().to_string(),
            FormField::Guests => form.guests.clone(),
            FormField::Message => form.message.value().to_string(),
        };
        let placeholder = match field {
            FormField::Apartment => "Left/Right to choose an apartment",
            FormField::Guests => "Left/Right or type 1-6",
            FormField::CheckIn | FormField::CheckOut => "YYYY-MM-DD",
            _ => "",
        };
        let shown = if value.is_empty() {
            Span::styled(placeholder, palette.muted_style())
        } else {
            Span::styled(value, palette.input_style(focused))
        };
        lines.push(Line::from(vec![
            Span::styled(
                marker,
                palette.primary_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{}{:<20}", required, field.label()),
                if focused {
                    palette.primary_style().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.text_secondary)
                },
            ),
            shown,
        ]));
        lines.push(Line::from(""));
    }

    if form.submitting {
        lines.push(Line::from(Span::styled(
            "Sending your booking request...",
            palette.warning_style().add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[Enter]", palette.shortcut_key_style()),
            Span::styled(" Submit Booking Request   ", palette.shortcut_desc_style()),
            Span::styled("[Esc]", palette.shortcut_key_style()),
            Span::styled(" Close", palette.shortcut_desc_style()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    // Cursor on the focused free-text field.
    let text_cursor = match form.focus {
        FormField::FullName => Some((0, form.full_name.cursor())),
        FormField::Email => Some((1, form.email.cursor())),
        FormField::Phone => Some((2, form.phone.cursor())),
        FormField::CheckIn => Some((4, form.check_in.cursor())),
        FormField::CheckOut => Some((5, form.check_out.cursor())),
        FormField::Message => Some((7, form.message.cursor())),
        FormField::Apartment | FormField::Guests => None,
    };
    if let Some((row, cursor)) = text_cursor {
        if !form.submitting {
            frame.set_cursor_position((
                inner.x + 23 + cursor as u16,
                inner.y + (row * 2) as u16,
            ));
        }
    }
}

// -------------------------------------------------------------- status bar

fn render_status_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (mode_text, mode_color) = if app.booking.is_open {
        ("BOOKING", palette.warning)
    } else {
        match app.page {
            Page::Home => ("HOME", palette.success),
            Page::Properties => ("BROWSE", palette.success),
            Page::Detail => ("DETAIL", palette.success),
        }
    };

    let mut spans = vec![
        Span::styled(
            format!(" {mode_text} "),
            Style::default()
                .fg(palette.bg)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" Theme: {} ", app.theme.name()),
            palette.muted_style(),
        ),
    ];
    match &app.notice {
        Some(notice) => {
            let style = match notice.kind {
                NoticeKind::Info => palette.info_style(),
                NoticeKind::Success => palette.success_style().add_modifier(Modifier::BOLD),
                NoticeKind::Error => palette.error_style().add_modifier(Modifier::BOLD),
            };
            spans.push(Span::styled(format!(" {} ", notice.text), style));
        }
        None => spans.push(Span::styled(
            " Press ? for help ",
            palette.muted_style(),
        )),
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(palette.status_bar_style()),
    );
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let shortcuts: &[(&str, &str)] = if app.booking.is_open {
        &[
            ("Tab", "Next field"),
            ("←→", "Choose"),
            ("Enter", "Submit"),
            ("Esc", "Close"),
        ]
    } else {
        match (app.page, app.catalog_focus) {
            (Page::Properties, CatalogFocus::Filters) => &[
                ("↑↓", "Field"),
                ("Enter", "Apply"),
                ("Tab", "Results"),
                ("Esc", "Results"),
            ],
            (Page::Properties, CatalogFocus::List) => &[
                ("j/k", "Move"),
                ("Enter", "Details"),
                ("b", "Book"),
                ("Tab", "Filters"),
                ("x", "Clear filters"),
                ("q", "Quit"),
            ],
            (Page::Detail, _) => &[
                ("b", "Book"),
                ("Esc", "Back"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
            (Page::Home, _) => &[
                ("b", "Book"),
                ("2", "Properties"),
                ("←→", "Featured"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
        }
    };

    let spans: Vec<Span> = shortcuts
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(format!("[{key}]"), palette.shortcut_key_style()),
                Span::styled(format!("{desc} "), palette.shortcut_desc_style()),
            ]
        })
        .collect();
    let footer = Paragraph::new(Line::from(spans))
        .style(palette.status_bar_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup = centered_rect(area, 56, 18);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled("KEYBOARD SHORTCUTS", palette.highlight_style())),
        Line::from(""),
        Line::from(Span::styled("Pages", palette.primary_style())),
        Line::from("  1 / 2            - Home / Properties"),
        Line::from("  Enter            - Open selected apartment"),
        Line::from("  Esc              - Back (quit from Home)"),
        Line::from(""),
        Line::from(Span::styled("Booking", palette.primary_style())),
        Line::from("  b                - Open the booking form"),
        Line::from("  Tab / Shift+Tab  - Move between fields"),
        Line::from("  Left/Right       - Pick apartment or guests"),
        Line::from("  Enter            - Submit the request"),
        Line::from(""),
        Line::from(Span::styled("Browsing", palette.primary_style())),
        Line::from("  Tab or /         - Jump to the filters"),
        Line::from("  x                - Clear all filters"),
        Line::from("  t                - Switch theme"),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("HELP", palette.title_style(true)),
                Span::raw(" - press any key to close "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(palette.border_style(true))
            .padding(Padding::new(2, 2, 1, 1))
            .style(Style::default().bg(palette.bg)),
    );
    frame.render_widget(help, popup);
}

// ----------------------------------------------------------------- helpers

fn titled_block<'a>(palette: &Palette, title: &str, active: bool) -> Block<'a> {
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title.to_string(), palette.title_style(active)),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(if active {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(palette.border_style(active))
        .padding(Padding::horizontal(1))
}

fn render_centered_note(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let note = Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(note, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn media_tag(property: &Property, palette: &Palette) -> (String, Style) {
    match property.cover() {
        Some(item) => {
            let style = match item.kind {
                MediaKind::Image => palette.info_style(),
                MediaKind::Video => palette.accent_style(),
            };
            (format!("[{}]", item.kind.tag()), style)
        }
        None => ("[ - ]".to_string(), palette.muted_style()),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Nightly rates render the way the marketing site prints them: naira sign
/// and thousands separators.
fn naira(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::new();
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("₦{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naira_grouping() {
        assert_eq!(naira(0), "₦0");
        assert_eq!(naira(950), "₦950");
        assert_eq!(naira(35_000), "₦35,000");
        assert_eq!(naira(1_250_000), "₦1,250,000");
    }

    #[test]
    fn test_truncate_is_char_aware() {
        assert_eq!(truncate("Luxury Studio", 20), "Luxury Studio");
        assert_eq!(truncate("Executive 2-Bedroom", 10), "Executi...");
        assert_eq!(truncate("Abújá view", 7), "Abúj...");
    }

    #[test]
    fn test_centered_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered_rect(area, 64, 22);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
        assert!(popup.x >= area.x && popup.y >= area.y);
    }
}
