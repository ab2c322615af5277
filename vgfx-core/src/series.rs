/// Parser for plot sample text
use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{map_res, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair},
    IResult,
};

/// Parse a series of signed integers separated by commas and/or
/// whitespace, e.g. `11, 29, 10 20 12`.
pub fn parse_series(input: &str) -> Result<Vec<i32>, String> {
    let trimmed = input.trim();
    match parse_series_impl(trimmed) {
        Ok(("", samples)) => Ok(samples),
        Ok((rest, _)) => Err(format!(
            "trailing input near {:?}",
            rest.chars().take(16).collect::<String>()
        )),
        Err(e) => Err(format!("failed to parse series: {:?}", e)),
    }
}

fn parse_series_impl(input: &str) -> IResult<&str, Vec<i32>> {
    separated_list1(separator, integer)(input)
}

fn separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(delimited(multispace0, char(','), multispace0)),
        multispace1,
    ))(input)
}

fn integer(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse)(input)
}
