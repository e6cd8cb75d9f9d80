use crate::finder::{parse_extension_list, EncodingKind, FindError, SearchRequest};

const HELP_FLAGS: [&str; 4] = ["/?", "/h", "-h", "--help"];

/// 编码与排除选项的组合形式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestShape {
    EncodingAndExclude { encoding: String, extensions: String },
    EncodingOnly { encoding: String },
    ExcludeOnly { extensions: String },
    Bare,
}

impl RequestShape {
    fn classify(encoding: Option<String>, extensions: Option<String>) -> Self {
        match (encoding, extensions) {
            (Some(encoding), Some(extensions)) => RequestShape::EncodingAndExclude {
                encoding,
                extensions,
            },
            (Some(encoding), None) => RequestShape::EncodingOnly { encoding },
            (None, Some(extensions)) => RequestShape::ExcludeOnly { extensions },
            (None, None) => RequestShape::Bare,
        }
    }

    /// 构造搜索请求；编码名称在这里校验，早于任何文件系统访问
    pub fn into_request(self, query: &str, path: &str) -> Result<SearchRequest, FindError> {
        let request = SearchRequest::new(query, path);
        let request = match self {
            RequestShape::EncodingAndExclude {
                encoding,
                extensions,
            } => request
                .with_encoding(EncodingKind::parse(&encoding)?)
                .with_excluded(parse_extension_list(&extensions)),
            RequestShape::EncodingOnly { encoding } => {
                request.with_encoding(EncodingKind::parse(&encoding)?)
            }
            RequestShape::ExcludeOnly { extensions } => {
                request.with_excluded(parse_extension_list(&extensions))
            }
            RequestShape::Bare => request,
        };
        Ok(request)
    }
}

/// 解析后的搜索命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommand {
    pub request: SearchRequest,
    pub parallel: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Search(SearchCommand),
}

fn missing_arguments() -> FindError {
    FindError::configuration("No encoding, file types, directory or file specified.")
}

fn repeated(flag: &str) -> FindError {
    FindError::configuration(format!("Option {} specified more than once.", flag))
}

/// 解析 `[/e <encoding>] [/x <types>] [/p] [/v] /s <string> <path>`
///
/// 只有选项位置的参数按小写比较，查找内容和路径保持原样。
pub fn parse_command(tokens: &[String]) -> Result<Invocation, FindError> {
    let first = match tokens.first() {
        None => return Ok(Invocation::Help),
        Some(first) => first,
    };
    if HELP_FLAGS.contains(&first.to_lowercase().as_str()) {
        return Ok(Invocation::Help);
    }

    let mut encoding: Option<String> = None;
    let mut extensions: Option<String> = None;
    let mut parallel = false;
    let mut verbose = false;
    let mut i = 0;

    loop {
        let token = tokens.get(i).ok_or_else(missing_arguments)?;
        let flag = token.to_lowercase();
        match flag.as_str() {
            "/s" => break,
            "/e" => {
                if encoding.is_some() {
                    return Err(repeated("/e"));
                }
                let value = tokens
                    .get(i + 1)
                    .filter(|v| !v.starts_with('/'))
                    .ok_or_else(|| FindError::configuration("No encoding specified after /e."))?;
                encoding = Some(value.clone());
                i += 2;
            }
            "/x" => {
                if extensions.is_some() {
                    return Err(repeated("/x"));
                }
                let value = tokens.get(i + 1).ok_or_else(missing_arguments)?;
                // "/x /s ..." 表示排除列表为空
                if value.eq_ignore_ascii_case("/s") {
                    extensions = Some(String::new());
                    i += 1;
                } else {
                    extensions = Some(value.clone());
                    i += 2;
                }
            }
            "/p" => {
                if parallel {
                    return Err(repeated("/p"));
                }
                parallel = true;
                i += 1;
            }
            "/v" => {
                if verbose {
                    return Err(repeated("/v"));
                }
                verbose = true;
                i += 1;
            }
            _ => return Err(FindError::UnknownCommand(token.clone())),
        }
    }

    let (query, path) = match &tokens[i + 1..] {
        [query, path] => (query, path),
        [] | [_] => return Err(missing_arguments()),
        [_, _, extra @ ..] => {
            return Err(FindError::configuration(format!(
                "Unexpected arguments after the path: {}",
                extra.join(" ")
            )))
        }
    };
    if query.is_empty() {
        return Err(FindError::configuration("No string specified to search for."));
    }

    let request = RequestShape::classify(encoding, extensions).into_request(query, path)?;
    Ok(Invocation::Search(SearchCommand {
        request,
        parallel,
        verbose,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::ErrorKind;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn search(args: &[&str]) -> SearchCommand {
        match parse_command(&tokens(args)).unwrap() {
            Invocation::Search(cmd) => cmd,
            Invocation::Help => panic!("expected a search for {:?}", args),
        }
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn help_when_empty_or_help_flag() {
        let cases: [&[&str]; 5] = [&[], &["/?"], &["/H"], &["-h"], &["--help", "x"]];
        for args in cases {
            assert_eq!(parse_command(&tokens(args)).unwrap(), Invocation::Help);
        }
    }

    #[test]
    fn bare_search() {
        let cmd = search(&["/s", "needle", "/tmp/Data"]);
        assert_eq!(cmd.request.query, "needle");
        assert_eq!(cmd.request.root, PathBuf::from("/tmp/Data"));
        assert_eq!(cmd.request.encoding, EncodingKind::SystemDefault);
        assert!(cmd.request.excluded_extensions.is_empty());
        assert!(!cmd.parallel);
        assert!(!cmd.verbose);
    }

    #[test]
    fn encoding_only() {
        let cmd = search(&["/E", "UTF-8", "/S", "Needle", "dir"]);
        assert_eq!(cmd.request.encoding, EncodingKind::Utf8);
        assert_eq!(cmd.request.query, "Needle");
    }

    #[test]
    fn exclude_only_and_empty_exclude() {
        let cmd = search(&["/x", "exe,dll", "/s", "q", "dir"]);
        assert_eq!(cmd.request.excluded_extensions, set(&["exe", "dll"]));

        let cmd = search(&["/x", "/s", "q", "dir"]);
        assert!(cmd.request.excluded_extensions.is_empty());
    }

    #[test]
    fn encoding_and_exclude_in_either_order() {
        let a = search(&["/e", "unicode", "/x", "exe", "/s", "q", "dir"]);
        let b = search(&["/x", "exe", "/e", "unicode", "/s", "q", "dir"]);
        assert_eq!(a, b);
        assert_eq!(a.request.encoding, EncodingKind::LittleEndianUtf16);
        assert_eq!(a.request.excluded_extensions, set(&["exe"]));
    }

    #[test]
    fn query_and_path_keep_their_case() {
        let cmd = search(&["/s", "/ABC", "/Some/Path"]);
        assert_eq!(cmd.request.query, "/ABC");
        assert_eq!(cmd.request.root, PathBuf::from("/Some/Path"));
    }

    #[test]
    fn parallel_and_verbose_switches() {
        let cmd = search(&["/p", "/v", "/e", "ascii", "/s", "q", "dir"]);
        assert!(cmd.parallel);
        assert!(cmd.verbose);
        assert_eq!(cmd.request.encoding, EncodingKind::Ascii);
    }

    #[test]
    fn unknown_leading_token_is_named() {
        let err = parse_command(&tokens(&["/q", "x", "y"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(matches!(err, FindError::UnknownCommand(ref t) if t == "/q"));
    }

    #[test]
    fn unsupported_encoding_is_configuration_error() {
        let err = parse_command(&tokens(&["/e", "ebcdic", "/s", "q", "dir"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("Unsupported encoding"));
    }

    #[test]
    fn malformed_grammar_is_rejected() {
        let cases: [&[&str]; 8] = [
            &["/s"],
            &["/s", "q"],
            &["/e"],
            &["/e", "/s", "q", "dir"],
            &["/x", "exe"],
            &["/s", "q", "dir", "extra"],
            &["/e", "utf8", "/e", "ascii", "/s", "q", "dir"],
            &["/s", "", "dir"],
        ];
        for args in cases {
            let err = parse_command(&tokens(args)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration, "{:?}", args);
        }
    }
}
