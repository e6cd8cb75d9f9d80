use crate::finder::config::{SearchConfig, SearchRequest};
use crate::finder::decoder::decode;
use crate::finder::error::FindError;
use crate::finder::filter::is_excluded;
use crate::finder::loader::ByteLoader;
use crate::finder::reporter::{MatchReporter, MatchResult, SearchSummary};
use crate::finder::walker::{resolve_root, Candidates, FileCandidate, RootKind};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

/// 一次搜索的最终结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 目录模式：汇总信息和所有匹配的路径
    Directory {
        summary: SearchSummary,
        matches: Vec<PathBuf>,
    },
    /// 文件模式：单个文件的检查结果
    File(MatchResult),
    /// 文件模式：文件扩展名被排除，没有读取
    Skipped { path: PathBuf, extension: String },
}

/// 在目录或单个文件中查找字符串
///
/// 匹配结果实时写入 `out`；任何 I/O 错误都会终止整个搜索，已输出的结果保留。
pub fn find_in_path<L, W>(
    request: &SearchRequest,
    config: &SearchConfig,
    loader: &L,
    out: W,
) -> Result<SearchOutcome, FindError>
where
    L: ByteLoader + Sync,
    W: Write + Send,
{
    if request.query.is_empty() {
        return Err(FindError::configuration("No string specified to search for."));
    }

    let root = resolve_root(&request.root)?;
    info!(
        "searching {:?} for {:?} using {} encoding",
        root, request.query, request.encoding
    );

    let mut reporter = MatchReporter::new(out, &request.query, config.show_progress);
    reporter.searching()?;

    match &root {
        RootKind::Directory(_) => {
            let start_time = Instant::now();
            let walked = if config.concurrent {
                search_parallel(&root, request, config, loader, &mut reporter)
            } else {
                search_sequential(&root, request, loader, &mut reporter)
            };
            if let Err(e) = walked {
                reporter.abort();
                warn!("search aborted: {}", e);
                return Err(e);
            }

            info!(
                "examined {} file(s) in {:.2}s",
                reporter.examined_count(),
                start_time.elapsed().as_secs_f64()
            );
            let summary = reporter.finish_directory()?;
            Ok(SearchOutcome::Directory {
                summary,
                matches: reporter.matches().to_vec(),
            })
        }
        RootKind::File(path) => {
            let candidate = FileCandidate::new(path.clone());
            if let Some(extension) = excluded_extension(&candidate, request) {
                debug!("skipping excluded file {}", candidate.path.display());
                reporter.file_skipped(&candidate.path, &extension)?;
                return Ok(SearchOutcome::Skipped {
                    path: candidate.path,
                    extension,
                });
            }

            let matched = match file_contains(&candidate, request, loader) {
                Ok(matched) => matched,
                Err(e) => {
                    reporter.abort();
                    warn!("search aborted: {}", e);
                    return Err(e);
                }
            };
            reporter.examined();

            let result = MatchResult {
                path: candidate.path,
                matched,
            };
            reporter.finish_file(&result)?;
            Ok(SearchOutcome::File(result))
        }
    }
}

/// 返回被排除的扩展名；未被排除时返回 None
fn excluded_extension(candidate: &FileCandidate, request: &SearchRequest) -> Option<String> {
    if is_excluded(&candidate.path, &request.excluded_extensions) {
        candidate.extension.clone()
    } else {
        None
    }
}

/// 读取、解码并检查文件是否包含查找的字符串
fn file_contains<L: ByteLoader>(
    candidate: &FileCandidate,
    request: &SearchRequest,
    loader: &L,
) -> Result<bool, FindError> {
    let bytes = loader.load(&candidate.path)?;
    let text = decode(&bytes, request.encoding);
    let matched = text.contains(request.query.as_str());
    debug!(
        "{} ({} bytes): {}",
        candidate.path.display(),
        bytes.len(),
        if matched { "match" } else { "no match" }
    );
    Ok(matched)
}

fn search_sequential<L, W>(
    root: &RootKind,
    request: &SearchRequest,
    loader: &L,
    reporter: &mut MatchReporter<W>,
) -> Result<(), FindError>
where
    L: ByteLoader,
    W: Write,
{
    for candidate in Candidates::new(root) {
        let candidate = candidate?;
        if is_excluded(&candidate.path, &request.excluded_extensions) {
            debug!("skipping excluded file {}", candidate.path.display());
            continue;
        }

        reporter.examined();
        if file_contains(&candidate, request, loader)? {
            reporter.report_match(&candidate.path)?;
        }
    }
    Ok(())
}

/// 并发模式：先完成遍历，再用线程池并行读取和匹配
fn search_parallel<L, W>(
    root: &RootKind,
    request: &SearchRequest,
    config: &SearchConfig,
    loader: &L,
    reporter: &mut MatchReporter<W>,
) -> Result<(), FindError>
where
    L: ByteLoader + Sync,
    W: Write + Send,
{
    let candidates: Vec<FileCandidate> = Candidates::new(root)
        .filter(|c| match c {
            Ok(c) => !is_excluded(&c.path, &request.excluded_extensions),
            Err(_) => true,
        })
        .collect::<Result<_, _>>()?;
    debug!(
        "walk finished, {} candidate(s) for {} worker(s)",
        candidates.len(),
        config.max_workers
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_workers.max(1))
        .build()
        .map_err(|e| FindError::configuration(format!("Failed to start worker pool: {}", e)))?;

    let shared = Mutex::new(reporter);
    pool.install(|| {
        candidates.par_iter().try_for_each(|candidate| {
            let matched = file_contains(candidate, request, loader)?;
            let mut reporter = shared.lock().unwrap_or_else(|p| p.into_inner());
            reporter.examined();
            if matched {
                reporter.report_match(&candidate.path)?;
            }
            Ok(())
        })
    })
}
