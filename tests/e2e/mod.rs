// End-to-end integration tests for the get-speech service
//
// Each test spawns the real router on an ephemeral port with in-memory
// fakes behind the artifact-store and synthesizer ports, then talks to it
// over HTTP with a hyper-based client. No network or cloud access is
// involved, so tests run in parallel.

mod helpers;
