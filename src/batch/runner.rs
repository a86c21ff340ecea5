//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 错误与诊断信息收集、汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(String, Vec<String>), // (输出描述, 诊断信息)
    /// 跳过（如文件已存在）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
    /// 成功文件附带的诊断信息
    pub warnings: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(what, warnings) => {
                self.success += 1;
                self.warnings
                    .extend(warnings.into_iter().map(|w| (what.clone(), w)));
            }
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器，`jobs == 0` 时使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理文件列表，结果顺序与输入一致
    pub fn run<F>(&self, files: Vec<PathBuf>, processor: F) -> BatchResult
    where
        F: Fn(&PathBuf) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Processing");

        let work = || -> Vec<ProcessResult> {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file);
                    pb.inc(1);
                    result
                })
                .collect()
        };

        // 线程池创建失败时退回全局线程池
        let results = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
        {
            Ok(pool) => pool.install(work),
            Err(_) => work(),
        };

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        batch_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_counts() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Success(
            "a.mat".to_string(),
            vec!["fallback".to_string()],
        ));
        result.merge(ProcessResult::Skipped("b.mat".to_string()));
        result.merge(ProcessResult::Failed("c.csv".to_string(), "bad row".to_string()));

        assert_eq!(result.success, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(
            result.warnings,
            vec![("a.mat".to_string(), "fallback".to_string())]
        );
        assert_eq!(result.failures[0].1, "bad row");
    }

    #[test]
    fn test_run_processes_every_file() {
        let runner = BatchRunner::new(2);
        assert_eq!(runner.jobs, 2);
        assert!(BatchRunner::new(0).jobs >= 1);

        let files: Vec<PathBuf> = (0..6).map(|i| PathBuf::from(format!("{}.csv", i))).collect();
        let result = runner.run(files, |file| {
            let name = file.display().to_string();
            if name.starts_with('3') {
                ProcessResult::Failed(name, "boom".to_string())
            } else {
                ProcessResult::Success(name, Vec::new())
            }
        });

        assert_eq!(result.success, 5);
        assert_eq!(result.failed, 1);
        assert_eq!(result.failures[0].0, "3.csv");
    }
}
