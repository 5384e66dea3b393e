use crate::constants::FALLBACK_LINE_COLOR;

/// Line colors keyed by operator, then by line name
const LINE_COLORS: &[(&str, &[(&str, &str)])] = &[(
    "A1",
    &[
        ("서울1호선", "#0052A4"),
        ("서울2호선", "#00A84D"),
        ("서울3호선", "#EF7C1C"),
        ("서울4호선", "#00A5DE"),
        ("서울5호선", "#996CAC"),
        ("서울6호선", "#CD7C2F"),
        ("서울7호선", "#747F00"),
        ("서울8호선", "#E6186C"),
        ("서울9호선", "#BDB092"),
        ("경의중앙선", "#77C4A3"),
        ("수인분당선", "#F5A200"),
        ("경강선", "#003DA5"),
        ("경춘선", "#0C8E72"),
        ("KTX", "#204080"),
        ("ITX", "#505457"),
        ("ITX-새마을", "#C30E2F"),
        ("ITX-청춘", "#1CAE4C"),
        ("새마을호", "#5288F5"),
        ("무궁화호", "#E06040"),
        ("누리로", "#3D99C2"),
        ("통근열차", "#80E080"),
        ("중부내륙순환열차", "#3D860B"),
        ("백두대간협곡열차", "#3698D2"),
        ("남도해양열차", "#074286"),
        ("평화열차", "#1D2A56"),
        ("정선아리랑열차", "#753778"),
        ("서해금빛열차", "#F9BE00"),
        ("동해산타열차", "#139DA7"),
        ("공항철도", "#0090D2"),
        ("김포도시철도", "#A17800"),
        ("신분당선", "#D4003B"),
        ("서해선", "#81A914"),
        ("인천1호선", "#7CA8D5"),
        ("인천2호선", "#ED8B00"),
        ("의정부경전철", "#FDA600"),
        ("우이신설경전철", "#B0CE18"),
        ("용인경전철", "#509F22"),
        ("자기부상열차", "#FFCD12"),
    ],
)];

/// Display color for a line of the given operator
///
/// Unknown operators and unknown lines resolve to [`FALLBACK_LINE_COLOR`].
#[must_use]
pub fn color_for(operator: &str, line: &str) -> &'static str {
    LINE_COLORS
        .iter()
        .find(|(op, _)| *op == operator)
        .and_then(|(_, lines)| lines.iter().find(|(name, _)| *name == line))
        .map_or(FALLBACK_LINE_COLOR, |&(_, color)| color)
}
