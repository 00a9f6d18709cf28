use crate::dimacs::{self, DimacsError, DimacsGraph};
use crate::graph::undirected::TreeBackedGraph;
use crate::graph::*;
use crate::solver::{CliqueResult, MaxCliqueSolver, SolverError};
use bimap::BiHashMap;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Delegates maximum-clique search to an external program.
///
/// The instance goes to the child's standard input in DIMACS format with
/// vertices renumbered `1..=n`. The last non-empty line of the child's
/// standard output must carry the clique as whitespace-separated vertex
/// numbers; non-numeric tokens on that line (labels like `solution:`)
/// are ignored. The claimed clique is verified before being returned.
pub struct ExternalSolver {
    binary: PathBuf,
    args: Vec<String>,
}

impl ExternalSolver {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            args: vec![],
        }
    }

    /// Appends a command-line argument for the child.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl From<DimacsError> for SolverError {
    fn from(e: DimacsError) -> Self {
        match e {
            DimacsError::Io(io) => SolverError::Io(io),
            other => SolverError::Output(other.to_string()),
        }
    }
}

impl MaxCliqueSolver for ExternalSolver {
    fn find_max_clique(&self, graph: &TreeBackedGraph) -> Result<CliqueResult, SolverError> {
        if graph.vertex_size() == 0 {
            return Ok(CliqueResult {
                clique: graph.subset(&BTreeSet::new()),
                calls: 0,
            });
        }

        let mut numbering: BiHashMap<VertexId, usize> = BiHashMap::new();
        let mut relabeled = DimacsGraph::new();
        for (idx, v) in graph.iter_vertices().enumerate() {
            numbering.insert(v, idx + 1);
            relabeled.add_vertex(&(idx + 1));
        }
        for e in graph.iter_edges() {
            let u = *numbering.get_by_left(&e.source).unwrap();
            let v = *numbering.get_by_left(&e.sink).unwrap();
            relabeled
                .add_weighted_edge(&u, &v, e.weight)
                .map_err(|err| SolverError::Output(err.to_string()))?;
        }
        let mut instance = vec![];
        dimacs::write_graph(&mut instance, &relabeled, Some("maximum clique instance"))?;

        let mut child = Command::new(&self.binary)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| SolverError::Output("child has no standard input".into()))?;
        // fed from a helper thread: the child may flood its stdout before it
        // gets around to reading its stdin
        let feeder = std::thread::spawn(move || stdin.write_all(&instance));
        let output = child.wait_with_output()?;
        match feeder.join() {
            Ok(Ok(())) => {}
            // a child may exit without draining its input
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => return Err(SolverError::Output("instance feeder panicked".into())),
        }
        if !output.status.success() {
            return Err(SolverError::Output(format!(
                "solver exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let answer = stdout
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .ok_or_else(|| SolverError::Output("empty solver output".into()))?;
        let mut picked = BTreeSet::new();
        for num in answer.split_whitespace().filter_map(|t| t.parse().ok()) {
            let vid = numbering
                .get_by_right(&num)
                .copied()
                .ok_or(SolverError::UnknownVertex(num))?;
            picked.insert(vid);
        }

        let clique = graph.subset(&picked);
        if !clique.is_clique() {
            return Err(SolverError::Output(format!(
                "claimed clique {:?} is not a clique",
                answer.trim()
            )));
        }
        Ok(CliqueResult { clique, calls: 0 })
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    /// Materializes a shell script posing as a clique solver.
    struct FakeSolver(PathBuf);

    impl FakeSolver {
        fn with_script(tag: &str, script: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "fake-clique-solver-{}-{}.sh",
                std::process::id(),
                tag
            ));
            std::fs::write(&path, script).unwrap();
            let mut perms = std::fs::metadata(&path).unwrap().permissions();
            std::os::unix::fs::PermissionsExt::set_mode(&mut perms, 0o755);
            std::fs::set_permissions(&path, perms).unwrap();
            Self(path)
        }

        fn echoing(tag: &str, answer: &str) -> Self {
            Self::with_script(
                tag,
                &format!("#!/bin/sh\ncat >/dev/null\necho \"{}\"\n", answer),
            )
        }
    }

    impl Drop for FakeSolver {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn triangle_plus_pendant() -> (TreeBackedGraph, Vec<VertexId>) {
        let mut g = TreeBackedGraph::new();
        let vs: Vec<_> = (0..4).map(|_| g.add_vertex()).collect();
        g.add_edge(vs[0], vs[1]);
        g.add_edge(vs[0], vs[2]);
        g.add_edge(vs[1], vs[2]);
        g.add_edge(vs[2], vs[3]);
        (g, vs)
    }

    #[test]
    fn remaps_solver_numbering_back_to_vertex_ids() {
        let (g, vs) = triangle_plus_pendant();
        let fake = FakeSolver::echoing("ok", "solution: 1 2 3");
        let solver = ExternalSolver::new(&fake.0);
        let res = solver.find_max_clique(&g).unwrap();
        assert_eq!(res.vertices(), vec![vs[0], vs[1], vs[2]]);
        assert_eq!(res.calls, 0);
    }

    #[test]
    fn rejects_output_that_is_no_clique() {
        let (g, _) = triangle_plus_pendant();
        let fake = FakeSolver::echoing("notclique", "1 4");
        let solver = ExternalSolver::new(&fake.0);
        assert!(matches!(
            solver.find_max_clique(&g),
            Err(SolverError::Output(_))
        ));
    }

    #[test]
    fn rejects_unknown_vertex_numbers() {
        let (g, _) = triangle_plus_pendant();
        let fake = FakeSolver::echoing("unknown", "1 2 99");
        let solver = ExternalSolver::new(&fake.0);
        assert!(matches!(
            solver.find_max_clique(&g),
            Err(SolverError::UnknownVertex(99))
        ));
    }

    #[test]
    fn chatty_children_cannot_wedge_the_pipes() {
        // floods stdout past any pipe buffer before touching stdin, paired
        // with an instance too big to fit in the stdin pipe buffer
        let fake = FakeSolver::with_script(
            "chatty",
            "#!/bin/sh\nhead -c 262144 /dev/zero | tr '\\0' x\necho\ncat >/dev/null\necho \"solution: 1 2 3\"\n",
        );
        let n = 150;
        let mut g = TreeBackedGraph::new();
        let vs: Vec<_> = (0..n).map(|_| g.add_vertex()).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                g.add_edge(vs[i], vs[j]);
            }
        }
        let solver = ExternalSolver::new(&fake.0);
        let res = solver.find_max_clique(&g).unwrap();
        assert_eq!(res.vertices(), vec![vs[0], vs[1], vs[2]]);
    }

    #[test]
    fn empty_graphs_never_launch_the_child() {
        let g = TreeBackedGraph::new();
        let solver = ExternalSolver::new("/nonexistent/clique-solver");
        let res = solver.find_max_clique(&g).unwrap();
        assert_eq!(res.size(), 0);
    }
}
