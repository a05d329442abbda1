use std::hint::black_box;

use anyhow::Result;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ransomchats::indexer::{EntryKind, IndexConfig, RepoEntry, RepositorySource, build_chat_index};

/// Synthetic repository: `groups` directories with `chats` files each
struct SyntheticRepository {
    groups: usize,
    chats: usize,
    body: Vec<u8>,
}

impl RepositorySource for SyntheticRepository {
    fn list_directory(&self, path: &str) -> Result<Vec<RepoEntry>> {
        let (count, kind) = if path.is_empty() {
            (self.groups, EntryKind::Dir)
        } else {
            (self.chats, EntryKind::File)
        };
        Ok((0..count)
            .map(|i| {
                let name =
                    if path.is_empty() { format!("group-{}", i) } else { format!("{}.json", i) };
                RepoEntry { path: format!("{}/{}", path, name), name, kind, download_url: None }
            })
            .collect())
    }

    fn read_file(&self, _entry: &RepoEntry) -> Result<Vec<u8>> {
        Ok(self.body.clone())
    }
}

fn bench_build_chat_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chat_index");
    let messages: Vec<String> = (0..50)
        .map(|i| format!(r#"{{"party":"Victim","content":"message {}","timestamp":""}}"#, i))
        .collect();
    let body = format!(r#"{{"chat_id":"","messages":[{}]}}"#, messages.join(",")).into_bytes();

    for chats in [10, 100, 500].iter() {
        let repo = SyntheticRepository { groups: 20, chats: *chats, body: body.clone() };
        group.throughput(Throughput::Elements((20 * chats) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(chats), &repo, |b, repo| {
            b.iter(|| build_chat_index(black_box(repo), &IndexConfig::default()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_chat_index);
criterion_main!(benches);
