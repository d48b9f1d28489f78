/// Metadata columns the wide sheet layout is known to carry. Everything
/// else past the three positional columns is a process step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    Country,
    Category,
    Model,
    Gallery,
    Dimension,
    InstallVideo,
    Faq,
    WbsLevel,
    Remarks,
    TotalModels,
}

/// Resolved role of one header, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRole {
    Metadata(MetadataKind),
    ProcessStep(String),
}

/// Known header fragments, matched by substring containment against each
/// header cell. The sheet mixes English and Korean header spellings, so both
/// are listed. Order matters: more specific fragments come first so that
/// e.g. `TotalModels` is not claimed by the `Model` fragment.
const METADATA_FRAGMENTS: &[(&str, MetadataKind)] = &[
    ("TotalModels", MetadataKind::TotalModels),
    ("Install Video", MetadataKind::InstallVideo),
    ("WBS Level", MetadataKind::WbsLevel),
    ("Gallery", MetadataKind::Gallery),
    ("Dimension", MetadataKind::Dimension),
    ("FAQ", MetadataKind::Faq),
    ("Remarks", MetadataKind::Remarks),
    ("비고", MetadataKind::Remarks),
    ("Country", MetadataKind::Country),
    ("TR", MetadataKind::Country),
    ("Category", MetadataKind::Category),
    ("제품군", MetadataKind::Category),
    ("Model", MetadataKind::Model),
    ("제품명", MetadataKind::Model),
];

/// Classify every header into metadata vs. process step.
///
/// The first three columns are always country, category, and model name —
/// their header text is cosmetic. Beyond those, a header containing any
/// known metadata fragment is metadata; anything else (including the
/// `column_{n}` placeholders a blank header cell produces) is treated as a
/// process-step column carrying the header name.
pub fn classify_columns(headers: &[String]) -> Vec<ColumnRole> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| match idx {
            0 => ColumnRole::Metadata(MetadataKind::Country),
            1 => ColumnRole::Metadata(MetadataKind::Category),
            2 => ColumnRole::Metadata(MetadataKind::Model),
            _ => METADATA_FRAGMENTS
                .iter()
                .find(|(fragment, _)| header.contains(fragment))
                .map(|&(_, kind)| ColumnRole::Metadata(kind))
                .unwrap_or_else(|| ColumnRole::ProcessStep(header.clone())),
        })
        .collect()
}

/// Header names classified as process steps, in header order.
pub fn process_step_headers(roles: &[ColumnRole]) -> Vec<String> {
    roles
        .iter()
        .filter_map(|role| match role {
            ColumnRole::ProcessStep(name) => Some(name.clone()),
            ColumnRole::Metadata(_) => None,
        })
        .collect()
}

/// First header whose role is the given metadata kind, if any.
pub fn find_metadata_header<'a>(
    headers: &'a [String],
    roles: &[ColumnRole],
    kind: MetadataKind,
) -> Option<&'a String> {
    headers
        .iter()
        .zip(roles.iter())
        .find(|(_, role)| **role == ColumnRole::Metadata(kind))
        .map(|(header, _)| header)
}
