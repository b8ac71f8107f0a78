use crate::SEPARATOR;
use nom::{
    bytes::complete::take_till,
    character::complete::{char, i64 as nom_i64},
    combinator::{all_consuming, map},
    multi::separated_list0,
    IResult,
};

fn nom_field(input: &str) -> IResult<&str, &str> {
    map(take_till(|c: char| c == SEPARATOR), str::trim)(input)
}

fn nom_fields(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list0(char(SEPARATOR), nom_field)(input)
}

fn nom_coordinate(input: &str) -> IResult<&str, i64> {
    all_consuming(nom_i64)(input)
}

/// Splits a line on the separator and trims every field. Empty fields are
/// kept, including trailing ones, so `"S,R,"` has three fields.
pub(crate) fn fields(line: &str) -> Vec<&str> {
    match all_consuming(nom_fields)(line) {
        Ok((_, fields)) => fields,
        // Every character is either part of a field or a separator.
        Err(_) => vec![line.trim()],
    }
}

/// Reads a row or column number. Negative numbers are returned as-is, it is
/// up to the caller to decide what they mean.
pub(crate) fn coordinate(field: &str) -> Option<i64> {
    nom_coordinate(field).ok().map(|(_, number)| number)
}

#[cfg(test)]
mod tests {
    use super::{coordinate, fields};

    #[test]
    fn test_fields_trimmed() {
        assert_eq!(vec!["S", "R", "L"], fields(" S , R,L "));
    }

    #[test]
    fn test_fields_keep_empty() {
        assert_eq!(vec!["S", "", "R", ""], fields("S,,R,"));
        assert_eq!(vec![""], fields(""));
    }

    #[test]
    fn test_fields_record() {
        assert_eq!(vec!["0", "0", "R", "\"ABC123\""], fields("0, 0, R, \"ABC123\""));
    }

    #[test]
    fn test_coordinate() {
        assert_eq!(Some(12), coordinate("12"));
        assert_eq!(Some(-1), coordinate("-1"));
        assert_eq!(None, coordinate("1x"));
        assert_eq!(None, coordinate(""));
        assert_eq!(None, coordinate("99999999999999999999"));
    }
}
