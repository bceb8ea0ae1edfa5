use catalog_core::Msg;

pub const HELP: &str = "\
Commands:
  type <text>        edit the search query
  search             submit the current query
  find <text>        edit and submit in one step
  more               load the next page
  show <sku> [lang]  open product details
  clear              dismiss the detail error
  help               show this text
  quit               exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    match word {
        "" => Command::Dispatch(Vec::new()),
        "type" => Command::Dispatch(vec![Msg::QueryChanged(rest.to_string())]),
        "search" => Command::Dispatch(vec![Msg::SearchSubmitted]),
        "find" => Command::Dispatch(vec![
            Msg::QueryChanged(rest.to_string()),
            Msg::SearchSubmitted,
        ]),
        "more" => Command::Dispatch(vec![Msg::LoadMoreRequested]),
        "show" => {
            let mut args = rest.split_whitespace();
            let product_id = args.next().unwrap_or_default().to_string();
            let lang = args.next().map(str::to_string);
            Command::Dispatch(vec![Msg::DetailRequested { product_id, lang }])
        }
        "clear" => Command::Dispatch(vec![Msg::DetailErrorCleared]),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_keeps_text_verbatim() {
        assert_eq!(
            parse_line("type  usb c\n"),
            Command::Dispatch(vec![Msg::QueryChanged(" usb c".to_string())])
        );
        assert_eq!(
            parse_line("type"),
            Command::Dispatch(vec![Msg::QueryChanged(String::new())])
        );
    }

    #[test]
    fn find_edits_then_submits() {
        assert_eq!(
            parse_line("find laptop"),
            Command::Dispatch(vec![
                Msg::QueryChanged("laptop".to_string()),
                Msg::SearchSubmitted,
            ])
        );
    }

    #[test]
    fn show_takes_optional_language() {
        assert_eq!(
            parse_line("show 123"),
            Command::Dispatch(vec![Msg::DetailRequested {
                product_id: "123".to_string(),
                lang: None,
            }])
        );
        assert_eq!(
            parse_line("show 123 fr"),
            Command::Dispatch(vec![Msg::DetailRequested {
                product_id: "123".to_string(),
                lang: Some("fr".to_string()),
            }])
        );
    }

    #[test]
    fn show_without_id_still_dispatches() {
        assert_eq!(
            parse_line("show"),
            Command::Dispatch(vec![Msg::DetailRequested {
                product_id: String::new(),
                lang: None,
            }])
        );
    }

    #[test]
    fn simple_words() {
        assert_eq!(parse_line("search"), Command::Dispatch(vec![Msg::SearchSubmitted]));
        assert_eq!(parse_line("more"), Command::Dispatch(vec![Msg::LoadMoreRequested]));
        assert_eq!(parse_line("clear"), Command::Dispatch(vec![Msg::DetailErrorCleared]));
        assert_eq!(parse_line("help"), Command::Help);
        assert_eq!(parse_line("quit"), Command::Quit);
        assert_eq!(parse_line("   "), Command::Dispatch(Vec::new()));
        assert_eq!(parse_line("frobnicate x"), Command::Unknown("frobnicate".to_string()));
    }
}
