//! Per-kind slide layouts.
//!
//! Each layout yields the slide body that follows the heading. The
//! interactive and export renderers wrap it with their own container and
//! write the `<h1>` themselves.

use deck_model::{
    AmplificationSlide, CaseStudySlide, ComparisonSlide, CrisisSlide, DependenciesSlide,
    FoundationSlide, ImportanceSlide, ObjectivesSlide, OverviewSlide, ReflectionSlide,
    SessionOverviewSlide, Slide, SummarySlide, TechniqueSlide, TitleSlide,
};

use crate::view::{Element, View, el, text_el};

/// Body of a known slide; `None` for [`Slide::Unknown`].
pub(crate) fn slide_body(slide: &Slide) -> Option<Vec<View>> {
    let body = match slide {
        Slide::Title(slide) => title(slide),
        Slide::Overview(slide) => overview(slide),
        Slide::Objectives(slide) => objectives(slide),
        Slide::CaseStudy(slide) => case_study(slide),
        Slide::Importance(slide) => importance(slide),
        Slide::Foundation(slide) => foundation(slide),
        Slide::Comparison(slide) => comparison(slide),
        Slide::Amplification(slide) => amplification(slide),
        Slide::Dependencies(slide) => dependencies(slide),
        Slide::Crisis(slide) => crisis(slide),
        Slide::Technique(slide) => technique(slide),
        Slide::Summary(slide) => summary(slide),
        Slide::Reflection(slide) => reflection(slide),
        Slide::SessionOverview(slide) => session_overview(slide),
        Slide::Unknown(_) => return None,
    };
    Some(body)
}

/// Heading text, with `"Slide"` standing in for an empty one.
pub(crate) fn heading_or_default(slide: &Slide) -> &str {
    match slide.heading() {
        "" => "Slide",
        heading => heading,
    }
}

fn subtitle(text: Option<&String>) -> Option<Element> {
    text.map(|text| text_el("p", text.as_str()).class("subtitle"))
}

fn callout(class: &str, text: Option<&String>) -> Option<Element> {
    text.map(|text| el("div").class(class).child(text_el("p", text.as_str())))
}

fn bullets<'a>(items: impl IntoIterator<Item = &'a String>) -> Element {
    el("ul").children(items.into_iter().map(|item| text_el("li", item.as_str())))
}

/// `<li><strong>label</strong> rest</li>`
fn labeled_item(label: &str, rest: &str) -> Element {
    el("li").child(text_el("strong", label)).text(format!(" {rest}"))
}

fn icon(icon: Option<&String>) -> Option<Element> {
    icon.map(|icon| text_el("span", format!("{icon} ")).class("icon"))
}

fn section_heading(text: &str) -> Element {
    text_el("h2", text)
}

fn table<'a, R>(headers: &[&str], rows: R) -> Element
where
    R: IntoIterator<Item = Vec<&'a str>>,
{
    let head = el("thead").child(
        el("tr").children(headers.iter().map(|header| text_el("th", *header))),
    );
    let body = el("tbody").children(
        rows.into_iter()
            .map(|row| el("tr").children(row.into_iter().map(|cell| text_el("td", cell)))),
    );
    el("table").child(head).child(body)
}

fn title(slide: &TitleSlide) -> Vec<View> {
    let content = &slide.content;
    let meta: Vec<Element> = [
        ("Course", &content.course),
        ("Level", &content.level),
        ("Instructor", &content.instructor),
        ("Duration", &content.duration),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value
            .as_ref()
            .map(|value| text_el("p", format!("{label}: {value}")))
    })
    .collect();
    let mut body: Vec<View> = Vec::new();
    if let Some(subtitle) = &content.subtitle {
        body.push(text_el("h2", subtitle.as_str()).into());
    }
    if let Some(details) = &content.details {
        body.push(text_el("p", details.as_str()).class("details").into());
    }
    if !meta.is_empty() {
        body.push(el("div").class("meta").children(meta).into());
    }
    body
}

fn overview(slide: &OverviewSlide) -> Vec<View> {
    let mut body: Vec<View> = Vec::new();
    if let Some(duration) = &slide.duration {
        body.push(text_el("p", format!("Duration: {duration}")).class("meta").into());
    }
    if !slide.topics.is_empty() {
        body.push(bullets(&slide.topics).class("topics").into());
    }
    if !slide.parts.is_empty() {
        let parts = slide.parts.iter().map(|part| {
            el("li")
                .child(text_el("strong", format!("{}:", part.name)))
                .text(format!(" {}", part.topic))
                .child(text_el("small", format!(" ({})", part.time)))
        });
        body.push(el("ol").class("parts").children(parts).into());
    }
    body
}

fn objectives(slide: &ObjectivesSlide) -> Vec<View> {
    let items = slide.objectives.iter().map(|objective| {
        el("li")
            .maybe(icon(objective.icon.as_ref()))
            .text(objective.text.as_str())
    });
    let mut body: Vec<View> = Vec::new();
    body.extend(subtitle(slide.subtitle.as_ref()).map(View::from));
    body.push(el("ul").class("objectives").children(items).into());
    body
}

fn case_study(slide: &CaseStudySlide) -> Vec<View> {
    let mut body: Vec<View> = Vec::new();
    if let Some(case_name) = &slide.case_name {
        body.push(text_el("h2", case_name.as_str()).into());
    }
    let meta: Vec<&str> = [&slide.year, &slide.company]
        .into_iter()
        .filter_map(|value| value.as_deref())
        .collect();
    if !meta.is_empty() {
        body.push(text_el("p", meta.join(" | ")).class("meta").into());
    }
    for section in &slide.sections {
        let class = match &section.color {
            Some(color) => format!("case-section accent-{color}"),
            None => "case-section".to_string(),
        };
        body.push(
            el("div")
                .class(class)
                .child(text_el("h3", section.label.as_str()))
                .child(text_el("p", section.content.as_str()))
                .into(),
        );
    }
    body.extend(callout("callout", slide.highlight.as_ref()).map(View::from));
    body
}

fn importance(slide: &ImportanceSlide) -> Vec<View> {
    let points = slide.points.iter().map(|point| {
        el("li")
            .maybe(icon(point.icon.as_ref()))
            .child(text_el("strong", format!("{}:", point.title)))
            .text(format!(" {}", point.desc))
    });
    let mut body: Vec<View> = Vec::new();
    body.extend(subtitle(slide.subtitle.as_ref()).map(View::from));
    body.push(el("ul").class("points").children(points).into());
    body
}

fn foundation(slide: &FoundationSlide) -> Vec<View> {
    let mut body: Vec<View> = Vec::new();
    if let Some(principle) = &slide.principle {
        body.push(text_el("p", principle.as_str()).class("principle").into());
    }
    if let Some(formula) = &slide.formula {
        let rows = formula.components.iter().map(|component| {
            vec![
                component.term.as_str(),
                component.cause.as_str(),
                component.impact.as_str(),
            ]
        });
        body.push(
            el("div")
                .class("formula-block")
                .child(section_heading(&formula.title))
                .child(text_el("p", formula.equation.as_str()).class("formula"))
                .child(table(&["Term", "Cause", "Impact"], rows))
                .into(),
        );
    }
    body.extend(callout("callout", slide.insight.as_ref()).map(View::from));
    body
}

fn comparison(slide: &ComparisonSlide) -> Vec<View> {
    let mut body: Vec<View> = Vec::new();
    body.extend(subtitle(slide.subtitle.as_ref()).map(View::from));
    if slide.has_table() {
        let headers: Vec<&str> = slide.headers.iter().map(String::as_str).collect();
        let rows = slide
            .rows
            .iter()
            .map(|row| row.iter().map(String::as_str).collect::<Vec<_>>());
        body.push(table(&headers, rows).into());
    }
    let columns: Vec<Element> = [&slide.left, &slide.right]
        .into_iter()
        .flatten()
        .map(|column| {
            el("div")
                .class("column")
                .child(section_heading(&column.title))
                .child(bullets(&column.items))
        })
        .collect();
    if !columns.is_empty() {
        body.push(el("div").class("columns").children(columns).into());
    }
    if let Some(bottom) = &slide.bottom {
        let class = if bottom.emphasis {
            "callout emphasis"
        } else {
            "callout"
        };
        body.push(
            el("div")
                .class(class)
                .child(text_el("p", bottom.text.as_str()))
                .into(),
        );
    }
    body
}

fn amplification(slide: &AmplificationSlide) -> Vec<View> {
    let mut body: Vec<View> = Vec::new();
    body.extend(subtitle(slide.subtitle.as_ref()).map(View::from));
    for mechanism in &slide.mechanisms {
        let example = mechanism
            .example
            .as_ref()
            .map(|example| text_el("p", format!("Example: {example}")).class("example"));
        body.push(
            el("div")
                .class("mechanism")
                .child(
                    el("h3")
                        .maybe(icon(mechanism.icon.as_ref()))
                        .text(mechanism.name.as_str()),
                )
                .child(text_el("p", mechanism.description.as_str()))
                .maybe(example)
                .into(),
        );
    }
    body
}

fn dependencies(slide: &DependenciesSlide) -> Vec<View> {
    let rows = slide.applications.iter().map(|app| {
        vec![
            app.domain.as_str(),
            app.datasets.as_str(),
            app.samples.as_str(),
            app.challenge.as_str(),
        ]
    });
    let mut body: Vec<View> = Vec::new();
    body.extend(subtitle(slide.subtitle.as_ref()).map(View::from));
    body.push(table(&["Domain", "Datasets", "Samples", "Challenge"], rows).into());
    body.extend(callout("note", slide.note.as_ref()).map(View::from));
    body
}

fn crisis(slide: &CrisisSlide) -> Vec<View> {
    let rows = slide.findings.iter().map(|finding| {
        vec![
            finding.year.as_str(),
            finding.study.as_str(),
            finding.finding.as_str(),
            finding.impact.as_str(),
        ]
    });
    let mut body: Vec<View> = Vec::new();
    body.extend(subtitle(slide.subtitle.as_ref()).map(View::from));
    body.push(table(&["Year", "Study", "Finding", "Impact"], rows).into());
    body.extend(callout("callout emphasis", slide.message.as_ref()).map(View::from));
    body
}

fn technique(slide: &TechniqueSlide) -> Vec<View> {
    let mut body: Vec<View> = Vec::new();
    body.extend(subtitle(slide.subtitle.as_ref()).map(View::from));
    for (label, value) in [("Method", &slide.method), ("Process", &slide.process)] {
        if let Some(value) = value {
            body.push(
                el("p")
                    .child(text_el("strong", format!("{label}:")))
                    .text(format!(" {value}"))
                    .into(),
            );
        }
    }
    if !slide.details.is_empty() {
        body.push(bullets(&slide.details).class("details").into());
    }
    if !slide.properties.is_empty() {
        let rows = slide
            .properties
            .iter()
            .map(|(key, value)| vec![key.as_str(), value.as_str()]);
        body.push(section_heading("Properties").into());
        body.push(table(&["Property", "Value"], rows).into());
    }
    if !slide.example.is_empty() {
        let items = slide
            .example
            .iter()
            .map(|(key, value)| labeled_item(&format!("{key}:"), value));
        body.push(section_heading("Example").into());
        body.push(el("ul").class("example").children(items).into());
    }
    for (label, items) in [
        ("Advantages", &slide.advantages),
        ("Limitations", &slide.limitations),
    ] {
        if !items.is_empty() {
            body.push(section_heading(label).into());
            body.push(bullets(items).into());
        }
    }
    body
}

fn summary(slide: &SummarySlide) -> Vec<View> {
    let points = slide
        .key_points
        .iter()
        .map(|point| labeled_item(&format!("{}:", point.point), &point.detail));
    let mut body: Vec<View> = vec![el("ul").class("key-points").children(points).into()];
    body.extend(callout("callout transition", slide.transition.as_ref()).map(View::from));
    body
}

fn reflection(slide: &ReflectionSlide) -> Vec<View> {
    let questions = slide
        .questions
        .iter()
        .map(|question| text_el("li", question.as_str()));
    let mut body: Vec<View> = Vec::new();
    body.extend(subtitle(slide.subtitle.as_ref()).map(View::from));
    body.push(el("ol").class("questions").children(questions).into());
    body.extend(callout("note", slide.note.as_ref()).map(View::from));
    body
}

fn session_overview(slide: &SessionOverviewSlide) -> Vec<View> {
    let mut body: Vec<View> = Vec::new();
    let slide_total = slide.total_slides.map_or_else(
        || {
            slide
                .structure
                .iter()
                .fold(0u64, |total, block| total + u64::from(block.slides))
        },
        u64::from,
    );
    let mut meta = format!("{slide_total} slides");
    if let Some(total) = &slide.total_duration {
        meta = format!("{total} | {meta}");
    }
    body.push(text_el("p", meta).class("meta").into());
    for block in &slide.structure {
        let class = match &block.color {
            Some(color) => format!("session-block accent-{color}"),
            None => "session-block".to_string(),
        };
        body.push(
            el("div")
                .class(class)
                .child(
                    el("h3")
                        .maybe(icon(block.icon.as_ref()))
                        .text(format!("{}: {}", block.part, block.title)),
                )
                .child(
                    text_el("p", format!("{} | {} slides", block.duration, block.slides))
                        .class("meta"),
                )
                .child(bullets(&block.topics))
                .into(),
        );
    }
    body
}
