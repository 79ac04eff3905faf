/// Classification for retry policy.
///
/// The refresh loop never retries inside a cycle. The class decides whether
/// a failure is expected to clear up on the next scheduled cycle, which in
/// turn decides the log level it is reported at.
///
/// | Class | Retried? | Logged at |
/// |-------|----------|-----------|
/// | `Never` | No, same request will fail again | `error` |
/// | `NextCycle` | By the next scheduled cycle | `warn` |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad symbol or a payload we cannot parse.
    Never,

    /// Transient failure (rate limit, timeout, upstream 5xx, network).
    /// The next scheduled cycle picks it up; there is no backoff.
    NextCycle,
}
