//! Whole-system flow: registry, chain, session, and logging seam together.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use graft::{
	BindingRegistry, BoxedError, CallError, CallLogger, Interceptor, InterceptorChain, Invocation,
	MethodSig, ParamType, Props, Session, Signature, TypeDef, TypeKey, Value,
};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

static LEDGER: TypeDef = TypeDef {
	key: TypeKey("bank::Ledger"),
	description: "Account ledger operations",
	methods: &[
		MethodSig {
			name: "deposit",
			params: &[ParamType::Str, ParamType::Int],
			ret: ParamType::Int,
		},
		MethodSig {
			name: "balance",
			params: &[ParamType::Str],
			ret: ParamType::Int,
		},
	],
	fields: &[],
};

static AUDIT_LOG: TypeDef = TypeDef {
	key: TypeKey("bank::AuditLog"),
	description: "Append-only audit trail",
	methods: &[MethodSig {
		name: "append",
		params: &[ParamType::Str],
		ret: ParamType::Unit,
	}],
	fields: &[],
};

/// In-memory backend keeping balances per account.
#[derive(Default)]
struct LedgerSession {
	balances: Mutex<rustc_hash::FxHashMap<String, i64>>,
}

impl Session for LedgerSession {
	fn execute(
		&self,
		_owner: TypeKey,
		method: &'static MethodSig,
		args: Vec<Value>,
	) -> Result<Value, BoxedError> {
		let mut balances = self.balances.lock();
		let account = args[0].as_str().unwrap_or_default().to_owned();
		match method.name {
			"deposit" => {
				let amount = args[1].as_int().unwrap_or(0);
				let balance = balances.entry(account).or_insert(0);
				*balance += amount;
				Ok(Value::Int(*balance))
			}
			"balance" => Ok(Value::Int(balances.get(&account).copied().unwrap_or(0))),
			other => Err(format!("no action bound for `{other}`").into()),
		}
	}
}

/// Rejects non-positive deposits without ever reaching the backend.
struct DepositGuard {
	signatures: Vec<Signature>,
	rejections: AtomicUsize,
}

impl DepositGuard {
	fn new() -> Self {
		Self {
			signatures: vec![Signature::new(
				LEDGER.key,
				"deposit",
				&[ParamType::Str, ParamType::Int],
			)],
			rejections: AtomicUsize::new(0),
		}
	}
}

impl Interceptor for DepositGuard {
	fn intercept(&self, invocation: Invocation) -> Result<Value, CallError> {
		let amount = invocation.args()[1].as_int().unwrap_or(0);
		if amount <= 0 {
			self.rejections.fetch_add(1, Ordering::SeqCst);
			return Err(CallError::intercept(format!(
				"rejected non-positive deposit of {amount}"
			)));
		}
		invocation.proceed()
	}

	fn signatures(&self) -> &[Signature] {
		&self.signatures
	}
}

#[test]
fn guarded_ledger_round_trip() {
	graft_logging::init_with(&[]);

	let chain = Arc::new(InterceptorChain::new());
	let guard = Arc::new(DepositGuard::new());
	chain.register(Arc::clone(&guard) as Arc<dyn Interceptor>);

	let log_props: Props = [("log-args", "true")].into_iter().collect();
	chain.register_configured(
		Arc::new(CallLogger::new(vec![Signature::new(
			LEDGER.key,
			"deposit",
			&[ParamType::Str, ParamType::Int],
		)])),
		&log_props,
	);

	let registry = BindingRegistry::builder().chain(chain).build();
	let count = registry.register_all([&LEDGER, &AUDIT_LOG]).unwrap();
	assert_eq!(count, 2);

	let session = Arc::new(LedgerSession::default());
	let ledger = registry
		.instance(LEDGER.key, Arc::clone(&session) as Arc<dyn Session>)
		.unwrap();

	// Accepted deposits reach the backend and the running balance flows back.
	let balance = ledger
		.invoke("deposit", vec![Value::from("ann"), Value::from(40i64)])
		.unwrap();
	assert_eq!(balance, Value::Int(40));
	let balance = ledger
		.invoke("deposit", vec![Value::from("ann"), Value::from(2i64)])
		.unwrap();
	assert_eq!(balance, Value::Int(42));

	// The guard short-circuits bad deposits; the backend never sees them.
	let err = ledger
		.invoke("deposit", vec![Value::from("ann"), Value::from(-5i64)])
		.unwrap_err();
	assert!(matches!(err, CallError::Intercept(_)));
	assert_eq!(guard.rejections.load(Ordering::SeqCst), 1);
	assert_eq!(
		ledger.invoke("balance", vec![Value::from("ann")]).unwrap(),
		Value::Int(42)
	);

	// `balance` matches no declared signature: the guard never fires on it.
	// Neither does anything wrap AuditLog, whose type no signature names.
	let audit = registry
		.instance(AUDIT_LOG.key, Arc::new(LedgerSession::default()))
		.unwrap();
	let err = audit.invoke("append", vec![Value::from("x")]).unwrap_err();
	assert!(matches!(err, CallError::Backend(_)));
}

#[test]
fn distinct_sessions_get_distinct_bindings() {
	let registry = BindingRegistry::new();
	registry.register(&LEDGER).unwrap();

	let a = Arc::new(LedgerSession::default());
	let b = Arc::new(LedgerSession::default());
	let ledger_a = registry
		.instance(LEDGER.key, Arc::clone(&a) as Arc<dyn Session>)
		.unwrap();
	let ledger_b = registry
		.instance(LEDGER.key, Arc::clone(&b) as Arc<dyn Session>)
		.unwrap();

	ledger_a
		.invoke("deposit", vec![Value::from("ann"), Value::from(10i64)])
		.unwrap();
	assert_eq!(
		ledger_b
			.invoke("balance", vec![Value::from("ann")])
			.unwrap(),
		Value::Int(0)
	);
}
