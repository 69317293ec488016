//! Embedded documentation content.
//!
//! This module holds the fixed topic and example tables used by the embedded
//! resolver. The tables are plain consts so the whole corpus is immutable and
//! shareable without locking. Table order is the iteration order for search,
//! so entries must stay in a stable order.

/// Category a topic is listed under in the topic index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Core,
    ContractTypes,
    MiddlewareExtensions,
    Advanced,
}

impl Category {
    /// Display name used in the topic listing.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::ContractTypes => "Contract Types",
            Self::MiddlewareExtensions => "Middleware & Extensions",
            Self::Advanced => "Advanced",
        }
    }

    /// All categories in listing order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Core,
            Self::ContractTypes,
            Self::MiddlewareExtensions,
            Self::Advanced,
        ]
    }
}

/// A single documentation topic.
#[derive(Debug)]
pub struct Topic {
    /// Lookup key, always lower-case.
    pub key: &'static str,

    /// Category the topic is grouped under in `list_topics`.
    pub category: Category,

    /// One-line summary shown in the topic listing.
    pub summary: &'static str,

    /// Full document body (Markdown).
    pub body: &'static str,
}

/// A code example entry.
#[derive(Debug)]
pub struct Example {
    /// Lookup key, always lower-case.
    pub key: &'static str,

    /// Literal substring used to locate matching fenced blocks when examples
    /// are mined from file-backed documentation.
    pub marker: &'static str,

    /// Literal example body served by the embedded resolver.
    pub body: &'static str,
}

/// Look up a topic by its (already normalized) key.
pub fn topic(key: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.key == key)
}

/// Look up an example by its (already normalized) key.
pub fn example(key: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|e| e.key == key)
}

/// Marker token for a feature key. Unknown keys fall back to the raw key so
/// extraction stays permissive instead of failing the call.
pub fn marker_for(feature: &str) -> &str {
    EXAMPLES
        .iter()
        .find(|e| e.key == feature)
        .map(|e| e.marker)
        .unwrap_or(feature)
}

/// All topic keys, sorted alphabetically. Used for "unknown topic" replies.
pub fn sorted_topic_keys() -> Vec<&'static str> {
    let mut keys: Vec<_> = TOPICS.iter().map(|t| t.key).collect();
    keys.sort_unstable();
    keys
}

/// All example keys, sorted alphabetically.
pub fn sorted_example_keys() -> Vec<&'static str> {
    let mut keys: Vec<_> = EXAMPLES.iter().map(|e| e.key).collect();
    keys.sort_unstable();
    keys
}

/// The fixed topic table. Order is the search iteration order.
pub static TOPICS: &[Topic] = &[
    Topic {
        key: "overview",
        category: Category::Core,
        summary: "What the mediator is and the problems it solves",
        body: r#"# Overview

The mediator is an in-process messaging library. Instead of injecting a
service and calling a method, callers publish a message and the mediator
routes it to the registered handler. Callers depend only on the contract
type, never on the handler.

Three message shapes cover most applications:

- Requests return a response and have exactly one handler.
- Commands perform work without a response and have exactly one handler.
- Events fan out to zero or more handlers.

Cross-cutting behaviour (caching, validation, resilience, logging) attaches
through middleware rather than being coded into every handler.

```csharp
UserDto user = await mediator.Request(new GetUser(42), ct);
await mediator.Send(new ArchiveOrder("A-1001"), ct);
await mediator.Publish(new OrderShipped("A-1001"), ct);
```

See `getting-started` for registration, and `middleware` for how the
pipeline is assembled around each handler.
"#,
    },
    Topic {
        key: "getting-started",
        category: Category::Core,
        summary: "Installation, registration, and your first request",
        body: r#"# Getting Started

Install the core package and register the mediator with your service
collection. Handlers are discovered from the assemblies you point it at.

```csharp
builder.Services.AddMediator(cfg => cfg
    .AddHandlersFromAssemblyOf<Program>()
    .UseDefaultMiddleware());
```

Define a request contract and a handler for it:

```csharp
public record GetUser(int Id) : IRequest<UserDto>;

public class GetUserHandler : IRequestHandler<GetUser, UserDto>
{
    public Task<UserDto> Handle(GetUser request, IMediatorContext context, CancellationToken ct)
        => this.users.FindAsync(request.Id, ct);
}
```

Then resolve `IMediator` anywhere and call it:

```csharp
var user = await mediator.Request(new GetUser(42), ct);
```

There is exactly one handler per request type. Registering a second handler
for the same contract fails at startup, not at call time.
"#,
    },
    Topic {
        key: "context",
        category: Category::Core,
        summary: "The per-invocation context bag shared across the pipeline",
        body: r#"# Mediator Context

Every invocation carries an `IMediatorContext`. It flows through the whole
middleware pipeline and into the handler, and is the way middleware and
handlers exchange per-call data without widening contract types.

```csharp
public class AuditMiddleware<TRequest, TResult> : IRequestMiddleware<TRequest, TResult>
{
    public async Task<TResult> Process(IMediatorContext context, RequestHandlerDelegate<TResult> next, CancellationToken ct)
    {
        context.Add("audit.start", DateTimeOffset.UtcNow);
        return await next();
    }
}
```

Values are keyed by string. Middleware that produced a value documents the
key it writes; readers treat absent keys as "feature not active". The
context also exposes the originating message and headers supplied at the
call site:

```csharp
await mediator.Request(new GetUser(42), ct, headers: new { TenantId = "acme" });
```

The context instance is scoped to one invocation. Do not capture it beyond
the lifetime of the call.
"#,
    },
    Topic {
        key: "requests",
        category: Category::ContractTypes,
        summary: "Request/response contracts with a single handler",
        body: r#"# Requests

A request is a contract that produces a response. Exactly one handler is
registered per request type.

```csharp
public record MyRequest(string Argument) : IRequest<MyResponse>;

public class MyRequestHandler : IRequestHandler<MyRequest, MyResponse>
{
    public async Task<MyResponse> Handle(MyRequest request, IMediatorContext context, CancellationToken ct)
    {
        var value = await this.service.LookupAsync(request.Argument, ct);
        return new MyResponse(value);
    }
}
```

Call it through the mediator:

```csharp
MyResponse response = await mediator.Request(new MyRequest("hello"), ct);
```

Prefer records for contracts: value equality makes request types usable as
cache keys (see `caching`). Handlers should stay thin and delegate to your
domain services; middleware handles the cross-cutting parts.
"#,
    },
    Topic {
        key: "commands",
        category: Category::ContractTypes,
        summary: "Fire-and-forget work with a single handler and no response",
        body: r#"# Commands

A command performs work without returning a value. Like requests, each
command type has exactly one handler.

```csharp
public record ArchiveOrder(string OrderId) : ICommand;

public class ArchiveOrderHandler : ICommandHandler<ArchiveOrder>
{
    public async Task Handle(ArchiveOrder command, IMediatorContext context, CancellationToken ct)
    {
        await this.orders.ArchiveAsync(command.OrderId, ct);
    }
}
```

Send it:

```csharp
await mediator.Send(new ArchiveOrder("A-1001"), ct);
```

Commands participate in the same middleware pipeline as requests, so
`[Validate]`, resilience and offline queuing all apply. Use a command when
the caller does not care about a result; use a request when it does.
"#,
    },
    Topic {
        key: "events",
        category: Category::ContractTypes,
        summary: "Publish/subscribe notifications with any number of handlers",
        body: r#"# Events

An event notifies the rest of the application that something happened.
Zero, one, or many handlers may subscribe; publishing with no subscribers
is not an error.

```csharp
public record OrderShipped(string OrderId) : IEvent;

public class SendReceiptHandler : IEventHandler<OrderShipped>
{
    public Task Handle(OrderShipped @event, IMediatorContext context, CancellationToken ct)
        => this.mail.SendReceiptAsync(@event.OrderId, ct);
}

public class UpdateDashboardHandler : IEventHandler<OrderShipped>
{
    public Task Handle(OrderShipped @event, IMediatorContext context, CancellationToken ct)
        => this.dashboard.RefreshAsync(ct);
}
```

```csharp
await mediator.Publish(new OrderShipped("A-1001"), ct);
```

Handlers run independently: one handler throwing does not stop the others
(see `exception-handlers` for how failures are reported). Ordering between
event handlers is deliberately unspecified.
"#,
    },
    Topic {
        key: "streams",
        category: Category::ContractTypes,
        summary: "Async streaming responses via IAsyncEnumerable",
        body: r#"# Streams

A stream request yields a sequence of values over time instead of a single
response. The handler returns an `IAsyncEnumerable<T>` and the caller
consumes it with `await foreach`.

```csharp
public record TickerUpdates(string Symbol) : IStreamRequest<decimal>;

public class TickerUpdatesHandler : IStreamRequestHandler<TickerUpdates, decimal>
{
    public async IAsyncEnumerable<decimal> Handle(
        TickerUpdates request,
        IMediatorContext context,
        [EnumeratorCancellation] CancellationToken ct)
    {
        while (!ct.IsCancellationRequested)
        {
            yield return await this.feed.NextAsync(request.Symbol, ct);
        }
    }
}
```

```csharp
await foreach (var price in mediator.Request(new TickerUpdates("ACME"), ct))
    Render(price);
```

Middleware wraps the enumerable itself, so a resilience policy can restart
a broken stream and a cache can replay the last known value to new
subscribers. Cancellation propagates through the enumerator token.
"#,
    },
    Topic {
        key: "middleware",
        category: Category::MiddlewareExtensions,
        summary: "The pipeline that wraps every handler invocation",
        body: r#"# Middleware

Middleware wraps handler execution the same way HTTP middleware wraps a
request. Each piece receives the invocation context and a delegate to the
rest of the pipeline.

```csharp
public class StopwatchMiddleware<TRequest, TResult> : IRequestMiddleware<TRequest, TResult>
{
    public async Task<TResult> Process(IMediatorContext context, RequestHandlerDelegate<TResult> next, CancellationToken ct)
    {
        var sw = Stopwatch.StartNew();
        try
        {
            return await next();
        }
        finally
        {
            this.logger.LogDebug("{Request} took {Ms}ms", typeof(TRequest).Name, sw.ElapsedMilliseconds);
        }
    }
}
```

Register middleware in order; the first registered runs outermost:

```csharp
cfg.AddMiddleware(typeof(StopwatchMiddleware<,>));
```

The built-in middleware (caching, validation, resilience, offline) are all
implemented exactly like the sample above. Open-generic registration lets
one middleware class cover every contract type.
"#,
    },
    Topic {
        key: "caching",
        category: Category::MiddlewareExtensions,
        summary: "Declarative response caching keyed by the request value",
        body: r#"# Caching

Mark a request handler with `[Cache]` and responses are cached keyed by the
request value. Records give value equality, so two requests with the same
arguments share one cache entry.

```csharp
public class GetCatalogHandler : IRequestHandler<GetCatalog, Catalog>
{
    [Cache(AbsoluteExpirationSeconds = 300, Storage = StoreType.Memory)]
    public Task<Catalog> Handle(GetCatalog request, IMediatorContext context, CancellationToken ct)
        => this.api.LoadCatalogAsync(ct);
}
```

Options:

- `AbsoluteExpirationSeconds`: hard lifetime of the entry.
- `SlidingExpirationSeconds`: lifetime extended on each hit.
- `Storage`: `Memory` or `File` (file storage survives restarts).

Callers can bypass or refresh the cache per call through context headers:

```csharp
await mediator.Request(new GetCatalog(), ct, headers: CacheHeaders.ForceRefresh);
```

Whether a response came from cache is recorded in the invocation context
under the `cache.hit` key. For queueing writes while disconnected see
`offline`; the two features compose.
"#,
    },
    Topic {
        key: "offline",
        category: Category::MiddlewareExtensions,
        summary: "Replaying the last known response while disconnected",
        body: r#"# Offline

Offline support keeps the last successful response for a request type in
persistent storage and replays it when the network is unavailable, so the
UI can render stale-but-useful data instead of an error page.

```csharp
public class GetDashboardHandler : IRequestHandler<GetDashboard, Dashboard>
{
    [OfflineAvailable]
    public Task<Dashboard> Handle(GetDashboard request, IMediatorContext context, CancellationToken ct)
        => this.api.LoadDashboardAsync(ct);
}
```

When connectivity is down the middleware short-circuits the handler and
returns the stored value; the context exposes `offline.timestamp` so the
caller can show the age of the data:

```csharp
var dashboard = await mediator.Request(new GetDashboard(), ct);
if (context.TryGet("offline.timestamp", out DateTimeOffset stamp))
    this.banner.ShowStaleNotice(stamp);
```

Offline storage is per request value, like cache keys. Clearing the cache
also clears offline snapshots.
"#,
    },
    Topic {
        key: "resilience",
        category: Category::MiddlewareExtensions,
        summary: "Timeouts, retries, and circuit breaking around handlers",
        body: r#"# Resilience

Resilience middleware wraps a handler in a named pipeline of timeout,
retry, and circuit-breaker policies.

```csharp
public class SubmitOrderHandler : ICommandHandler<SubmitOrder>
{
    [Resilient("orders")]
    public Task Handle(SubmitOrder command, IMediatorContext context, CancellationToken ct)
        => this.api.SubmitAsync(command, ct);
}
```

Pipelines are configured once at registration:

```csharp
cfg.AddResiliencePipeline("orders", p => p
    .AddTimeout(TimeSpan.FromSeconds(10))
    .AddRetry(new RetryStrategyOptions { MaxRetryAttempts = 3 }));
```

Retries re-enter the full downstream pipeline, so a retried request passes
validation again but will hit the cache if a concurrent call already
populated it. Combine with `offline` to fall back to the last known
response after the final attempt fails.
"#,
    },
    Topic {
        key: "validation",
        category: Category::MiddlewareExtensions,
        summary: "Contract validation with data annotations before the handler runs",
        body: r#"# Validation

Mark a contract with `[Validate]` and the validation middleware checks its
data annotations before the handler runs. Invalid contracts never reach
the handler.

```csharp
[Validate]
public record CreateAccount(
    [Required] [EmailAddress] string Email,
    [MinLength(8)] string Password
) : ICommand;
```

A failed validation surfaces as a `ValidateResult` carrying the per-member
errors:

```csharp
try
{
    await mediator.Send(new CreateAccount(email, password), ct);
}
catch (ValidateException ex)
{
    foreach (var (member, errors) in ex.Result.Errors)
        this.form.MarkInvalid(member, errors);
}
```

Custom validators plug in by implementing `IValidator<T>` alongside or
instead of annotations. Validation runs inside the pipeline, so a cached
response (already validated when produced) does not re-validate.
"#,
    },
    Topic {
        key: "http",
        category: Category::MiddlewareExtensions,
        summary: "Contract-driven HTTP calls without hand-written clients",
        body: r#"# HTTP

Decorate a contract with `[Http]` and the mediator performs the HTTP call
itself; no handler class is written at all. Contract members bind to the
path, query, header, or body.

```csharp
[Http(HttpVerb.Get, "/api/users/{Id}")]
public record GetUserHttp(
    [HttpParameter(HttpParameterType.Path)] int Id
) : IRequest<UserDto>;
```

```csharp
var user = await mediator.Request(new GetUserHttp(42), ct);
```

The base address comes from configuration, keyed by contract assembly or
overridden per contract:

```json
{ "Mediator": { "Http": { "MyApp.Contracts": "https://api.example.com" } } }
```

Because the HTTP call runs inside the normal pipeline, `[Cache]`,
`[Resilient]` and `[OfflineAvailable]` all apply to generated calls the
same way they do to hand-written handlers.
"#,
    },
    Topic {
        key: "exception-handlers",
        category: Category::MiddlewareExtensions,
        summary: "Centralized handling for exceptions escaping handlers",
        body: r#"# Exception Handlers

An exception handler observes exceptions that escape a handler or the
pipeline, decides whether they are handled, and optionally replaces the
outcome.

```csharp
public class LogAndSwallowHandler : IExceptionHandler
{
    public Task<bool> Handle(object message, IMediatorContext context, Exception ex)
    {
        this.logger.LogError(ex, "Unhandled mediator exception for {Message}", message.GetType().Name);
        return Task.FromResult(true);
    }
}
```

Returning `true` marks the exception handled: commands and events complete
silently, requests surface a default response. Returning `false` lets the
exception propagate to the caller.

Event publication aggregates per-handler failures: every subscriber runs,
then the collected exceptions are offered to the exception handlers once.
Register multiple handlers; the first one returning `true` wins.
"#,
    },
    Topic {
        key: "source-generation",
        category: Category::Advanced,
        summary: "Compile-time handler registration instead of reflection scans",
        body: r#"# Source Generation

Handler discovery normally scans assemblies with reflection at startup.
The source generator moves that work to compile time: it emits a
registration method enumerating every contract, handler, and middleware in
the compilation.

```csharp
builder.Services.AddGeneratedMediator();
```

Benefits:

- Startup cost drops to a flat list of `AddSingleton` calls.
- Missing or duplicate handlers become compile-time diagnostics.
- Trimming and AOT work because nothing is discovered via reflection.

The generator runs automatically when the package is referenced; the
`AddGeneratedMediator` call is itself generated into your registration
namespace. Mixing generated and reflection-based registration in one app
is supported during migration, generated registrations win on conflict.
"#,
    },
    Topic {
        key: "advanced",
        category: Category::Advanced,
        summary: "Covariance, custom dispatchers, and performance notes",
        body: r#"# Advanced

Notes for heavy users.

## Covariant event handlers

An `IEventHandler<OrderEvent>` also receives `OrderShipped` if
`OrderShipped : OrderEvent`. Dispatch walks the inheritance chain of the
published event and unions the subscriber sets.

## Custom dispatchers

The default dispatcher resolves handlers from the service provider per
call. Implement `IRequestDispatcher` to change resolution, for example to
shard handlers across tenants:

```csharp
public class TenantDispatcher : IRequestDispatcher
{
    public Task<TResult> Dispatch<TResult>(IRequest<TResult> request, IMediatorContext context, CancellationToken ct)
        => this.providers[context.Tenant()].Dispatch(request, context, ct);
}
```

## Performance

Contract-to-handler resolution is a dictionary hit after first use.
Middleware arrays are materialized once per contract type. Allocation per
request is two objects (context plus boxed enumerator for streams); if
that matters to you, see `source-generation` to eliminate the startup
scan as well.
"#,
    },
];

/// The fixed example table. Marker tokens are the literal substrings used to
/// find relevant fenced blocks when mining file-backed documentation.
pub static EXAMPLES: &[Example] = &[
    Example {
        key: "request",
        marker: "IRequestHandler",
        body: r#"public record GetUser(int Id) : IRequest<UserDto>;

public class GetUserHandler : IRequestHandler<GetUser, UserDto>
{
    public Task<UserDto> Handle(GetUser request, IMediatorContext context, CancellationToken ct)
        => this.users.FindAsync(request.Id, ct);
}

// Caller side
UserDto user = await mediator.Request(new GetUser(42), ct);
"#,
    },
    Example {
        key: "command",
        marker: "ICommandHandler",
        body: r#"public record ArchiveOrder(string OrderId) : ICommand;

public class ArchiveOrderHandler : ICommandHandler<ArchiveOrder>
{
    public async Task Handle(ArchiveOrder command, IMediatorContext context, CancellationToken ct)
    {
        await this.orders.ArchiveAsync(command.OrderId, ct);
    }
}

// Caller side
await mediator.Send(new ArchiveOrder("A-1001"), ct);
"#,
    },
    Example {
        key: "event",
        marker: "IEventHandler",
        body: r#"public record OrderShipped(string OrderId) : IEvent;

public class SendReceiptHandler : IEventHandler<OrderShipped>
{
    public Task Handle(OrderShipped @event, IMediatorContext context, CancellationToken ct)
        => this.mail.SendReceiptAsync(@event.OrderId, ct);
}

// Caller side: all subscribed handlers run
await mediator.Publish(new OrderShipped("A-1001"), ct);
"#,
    },
    Example {
        key: "stream",
        marker: "IStreamRequestHandler",
        body: r#"public record TickerUpdates(string Symbol) : IStreamRequest<decimal>;

public class TickerUpdatesHandler : IStreamRequestHandler<TickerUpdates, decimal>
{
    public async IAsyncEnumerable<decimal> Handle(
        TickerUpdates request,
        IMediatorContext context,
        [EnumeratorCancellation] CancellationToken ct)
    {
        while (!ct.IsCancellationRequested)
        {
            yield return await this.feed.NextAsync(request.Symbol, ct);
        }
    }
}
"#,
    },
    Example {
        key: "caching",
        marker: "[Cache(",
        body: r#"public class GetCatalogHandler : IRequestHandler<GetCatalog, Catalog>
{
    [Cache(AbsoluteExpirationSeconds = 300, Storage = StoreType.Memory)]
    public Task<Catalog> Handle(GetCatalog request, IMediatorContext context, CancellationToken ct)
        => this.api.LoadCatalogAsync(ct);
}
"#,
    },
    Example {
        key: "validation",
        marker: "[Validate]",
        body: r#"[Validate]
public record CreateAccount(
    [Required] [EmailAddress] string Email,
    [MinLength(8)] string Password
) : ICommand;
"#,
    },
    Example {
        key: "http",
        marker: "[Http(",
        body: r#"[Http(HttpVerb.Get, "/api/users/{Id}")]
public record GetUserHttp(
    [HttpParameter(HttpParameterType.Path)] int Id
) : IRequest<UserDto>;

// No handler class needed; the mediator performs the HTTP call.
var user = await mediator.Request(new GetUserHttp(42), ct);
"#,
    },
    Example {
        key: "middleware",
        marker: "IRequestMiddleware",
        body: r#"public class StopwatchMiddleware<TRequest, TResult> : IRequestMiddleware<TRequest, TResult>
{
    public async Task<TResult> Process(IMediatorContext context, RequestHandlerDelegate<TResult> next, CancellationToken ct)
    {
        var sw = Stopwatch.StartNew();
        try
        {
            return await next();
        }
        finally
        {
            this.logger.LogDebug("{Request} took {Ms}ms", typeof(TRequest).Name, sw.ElapsedMilliseconds);
        }
    }
}
"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_count() {
        assert_eq!(TOPICS.len(), 16);
    }

    #[test]
    fn test_topic_keys_unique_and_lowercase() {
        let keys = sorted_topic_keys();
        for window in keys.windows(2) {
            assert_ne!(window[0], window[1]);
        }
        for topic in TOPICS {
            assert_eq!(topic.key, topic.key.to_lowercase());
        }
    }

    #[test]
    fn test_example_markers_present_in_bodies() {
        // Every embedded example should demonstrate the thing its marker names.
        for example in EXAMPLES {
            assert!(
                example.body.contains(example.marker),
                "example '{}' body does not contain marker '{}'",
                example.key,
                example.marker
            );
        }
    }

    #[test]
    fn test_marker_fallback_is_raw_key() {
        assert_eq!(marker_for("request"), "IRequestHandler");
        assert_eq!(marker_for("mystery"), "mystery");
    }

    #[test]
    fn test_every_category_has_topics() {
        for category in Category::all() {
            assert!(TOPICS.iter().any(|t| t.category == *category));
        }
    }

    #[test]
    fn test_requests_topic_carries_canonical_contract_line() {
        let topic = topic("requests").unwrap();
        assert!(
            topic
                .body
                .contains("public record MyRequest(string Argument) : IRequest<MyResponse>;")
        );
    }
}
