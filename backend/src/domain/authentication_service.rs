//! Credential verification service.
//!
//! Implements the [`LoginService`] driving port by chaining three driven
//! ports: account lookup, password hash comparison and token issuance. Each
//! stage runs only when the previous one produced a usable value, and any
//! collaborator failure is handed back to the caller untouched apart from
//! being tagged with its stage.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AccountLookup, AuthenticationError, HashComparer, LoginService, TokenIssuer,
};
use crate::domain::{AuthenticationOutcome, LoginCredentials};

/// Stateless authentication service backed by an account store.
///
/// The service never mutates the account it reads and keeps no state
/// between calls, so one instance can serve any number of concurrent
/// requests.
#[derive(Clone)]
pub struct AccountAuthenticationService<L, C, T> {
    accounts: Arc<L>,
    hash_comparer: Arc<C>,
    token_issuer: Arc<T>,
}

impl<L, C, T> AccountAuthenticationService<L, C, T> {
    /// Create a new service with the given collaborators.
    pub fn new(accounts: Arc<L>, hash_comparer: Arc<C>, token_issuer: Arc<T>) -> Self {
        Self {
            accounts,
            hash_comparer,
            token_issuer,
        }
    }
}

#[async_trait]
impl<L, C, T> LoginService for AccountAuthenticationService<L, C, T>
where
    L: AccountLookup,
    C: HashComparer,
    T: TokenIssuer,
{
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticationOutcome, AuthenticationError> {
        let Some(account) = self.accounts.load_by_email(credentials.email()).await? else {
            return Ok(AuthenticationOutcome::NotAuthenticated);
        };

        let matches = self
            .hash_comparer
            .compare(credentials.password(), account.password_hash())
            .await?;
        if !matches {
            return Ok(AuthenticationOutcome::NotAuthenticated);
        }

        let token = self.token_issuer.generate(account.id()).await?;
        Ok(AuthenticationOutcome::Authenticated(token))
    }
}

#[cfg(test)]
mod tests {
    //! Pipeline ordering and short-circuit coverage.
    use super::*;
    use crate::domain::ports::{
        AccountLookupError, HashComparerError, MockAccountLookup, MockHashComparer,
        MockTokenIssuer, TokenIssuerError,
    };
    use crate::domain::{AccessToken, Account, AccountId};
    use mockall::Sequence;
    use rstest::{fixture, rstest};

    type Service = AccountAuthenticationService<MockAccountLookup, MockHashComparer, MockTokenIssuer>;

    fn make_service(
        lookup: MockAccountLookup,
        comparer: MockHashComparer,
        issuer: MockTokenIssuer,
    ) -> Service {
        AccountAuthenticationService::new(Arc::new(lookup), Arc::new(comparer), Arc::new(issuer))
    }

    #[fixture]
    fn account() -> Account {
        Account::new(
            AccountId::new("any_id").expect("valid fixture id"),
            "any_name",
            "any_email@email.com",
            "hashed_password",
        )
    }

    #[fixture]
    fn credentials() -> LoginCredentials {
        LoginCredentials::try_from_parts("any_email@email.com", "any_password")
            .expect("valid fixture credentials")
    }

    fn lookup_returning(account: Option<Account>) -> MockAccountLookup {
        let mut lookup = MockAccountLookup::new();
        lookup
            .expect_load_by_email()
            .times(1)
            .return_once(move |_| Ok(account));
        lookup
    }

    fn comparer_returning(matches: bool) -> MockHashComparer {
        let mut comparer = MockHashComparer::new();
        comparer
            .expect_compare()
            .times(1)
            .return_once(move |_, _| Ok(matches));
        comparer
    }

    fn idle_comparer() -> MockHashComparer {
        let mut comparer = MockHashComparer::new();
        comparer.expect_compare().never();
        comparer
    }

    fn idle_issuer() -> MockTokenIssuer {
        let mut issuer = MockTokenIssuer::new();
        issuer.expect_generate().never();
        issuer
    }

    fn issuer_returning(token: &'static str) -> MockTokenIssuer {
        let mut issuer = MockTokenIssuer::new();
        issuer
            .expect_generate()
            .times(1)
            .return_once(move |_| Ok(AccessToken::new(token)));
        issuer
    }

    #[rstest]
    #[tokio::test]
    async fn looks_up_account_by_request_email(account: Account, credentials: LoginCredentials) {
        let mut lookup = MockAccountLookup::new();
        lookup
            .expect_load_by_email()
            .withf(|email| email == "any_email@email.com")
            .times(1)
            .return_once(move |_| Ok(Some(account)));
        let service = make_service(lookup, comparer_returning(true), issuer_returning("any_token"));

        service
            .authenticate(&credentials)
            .await
            .expect("authentication succeeds");
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_failure_propagates_and_stops_pipeline(credentials: LoginCredentials) {
        let mut lookup = MockAccountLookup::new();
        lookup
            .expect_load_by_email()
            .times(1)
            .return_once(|_| Err(AccountLookupError::connection("store unreachable")));
        let service = make_service(lookup, idle_comparer(), idle_issuer());

        let err = service
            .authenticate(&credentials)
            .await
            .expect_err("lookup failure must surface");

        assert_eq!(
            err,
            AuthenticationError::AccountLookup(AccountLookupError::connection(
                "store unreachable"
            ))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_email_is_not_authenticated(credentials: LoginCredentials) {
        let service = make_service(lookup_returning(None), idle_comparer(), idle_issuer());

        let outcome = service
            .authenticate(&credentials)
            .await
            .expect("absence is not an error");

        assert_eq!(outcome, AuthenticationOutcome::NotAuthenticated);
    }

    #[rstest]
    #[tokio::test]
    async fn compares_request_password_with_stored_hash(
        account: Account,
        credentials: LoginCredentials,
    ) {
        let mut comparer = MockHashComparer::new();
        comparer
            .expect_compare()
            .withf(|plain, hash| plain == "any_password" && hash == "hashed_password")
            .times(1)
            .return_once(|_, _| Ok(true));
        let service = make_service(
            lookup_returning(Some(account)),
            comparer,
            issuer_returning("any_token"),
        );

        service
            .authenticate(&credentials)
            .await
            .expect("authentication succeeds");
    }

    #[rstest]
    #[tokio::test]
    async fn comparer_failure_propagates_and_skips_issuance(
        account: Account,
        credentials: LoginCredentials,
    ) {
        let mut comparer = MockHashComparer::new();
        comparer
            .expect_compare()
            .times(1)
            .return_once(|_, _| Err(HashComparerError::comparison("cost out of range")));
        let service = make_service(lookup_returning(Some(account)), comparer, idle_issuer());

        let err = service
            .authenticate(&credentials)
            .await
            .expect_err("comparer failure must surface");

        assert_eq!(err.stage(), "hash_comparison");
    }

    #[rstest]
    #[tokio::test]
    async fn password_mismatch_is_not_authenticated(
        account: Account,
        credentials: LoginCredentials,
    ) {
        let service = make_service(
            lookup_returning(Some(account)),
            comparer_returning(false),
            idle_issuer(),
        );

        let outcome = service
            .authenticate(&credentials)
            .await
            .expect("mismatch is not an error");

        assert_eq!(outcome, AuthenticationOutcome::NotAuthenticated);
    }

    #[rstest]
    #[tokio::test]
    async fn issues_token_for_looked_up_account_id(
        account: Account,
        credentials: LoginCredentials,
    ) {
        let mut issuer = MockTokenIssuer::new();
        issuer
            .expect_generate()
            .withf(|id| id.as_ref() == "any_id")
            .times(1)
            .return_once(|_| Ok(AccessToken::new("any_token")));
        let service = make_service(
            lookup_returning(Some(account)),
            comparer_returning(true),
            issuer,
        );

        let outcome = service
            .authenticate(&credentials)
            .await
            .expect("authentication succeeds");

        assert_eq!(
            outcome,
            AuthenticationOutcome::Authenticated(AccessToken::new("any_token"))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn issuer_failure_propagates(account: Account, credentials: LoginCredentials) {
        let mut issuer = MockTokenIssuer::new();
        issuer
            .expect_generate()
            .times(1)
            .return_once(|_| Err(TokenIssuerError::generation("entropy unavailable")));
        let service = make_service(
            lookup_returning(Some(account)),
            comparer_returning(true),
            issuer,
        );

        let err = service
            .authenticate(&credentials)
            .await
            .expect_err("issuer failure must surface");

        assert_eq!(
            err,
            AuthenticationError::TokenIssuance(TokenIssuerError::generation(
                "entropy unavailable"
            ))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn collaborators_run_in_pipeline_order(account: Account, credentials: LoginCredentials) {
        let mut seq = Sequence::new();
        let mut lookup = MockAccountLookup::new();
        let mut comparer = MockHashComparer::new();
        let mut issuer = MockTokenIssuer::new();
        lookup
            .expect_load_by_email()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_| Ok(Some(account)));
        comparer
            .expect_compare()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(true));
        issuer
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_| Ok(AccessToken::new("any_token")));
        let service = make_service(lookup, comparer, issuer);

        service
            .authenticate(&credentials)
            .await
            .expect("authentication succeeds");
    }
}
