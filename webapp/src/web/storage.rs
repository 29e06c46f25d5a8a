use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use api::contact::SubmitContactReq;

const CONTACT_OUTBOX_KEY: &str = "contact_outbox";

fn storage_key(key: &str) -> String {
    format!("drovalabs_{}", key)
}

pub fn set_local_storage<T>(key: &str, value: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let key = storage_key(key);

    LocalStorage::set(key.clone(), value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// a missing key is the normal first-visit case and reads as the default; anything
// else, including a value that no longer deserializes, is an error
fn stored_or_default<T>(result: Result<T, StorageError>) -> Result<T, StorageError>
where
    T: Default,
{
    match result {
        Err(StorageError::KeyNotFound(_)) => Ok(T::default()),
        other => other,
    }
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a> + Default,
{
    let key = storage_key(key);

    stored_or_default(LocalStorage::get(key.clone())).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// contact requests waiting for a form backend
//
// returns the number of queued requests, including this one. an outbox that cannot be
// read is left untouched rather than replaced
pub fn push_outbox(req: SubmitContactReq) -> anyhow::Result<usize> {
    let mut outbox: Vec<SubmitContactReq> = get_local_storage(CONTACT_OUTBOX_KEY)?;
    outbox.push(req);

    let len = outbox.len();
    set_local_storage(CONTACT_OUTBOX_KEY, outbox)?;

    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_outbox_reads_as_empty() {
        let outbox: Vec<SubmitContactReq> =
            stored_or_default(Err(StorageError::KeyNotFound("drovalabs_contact_outbox".to_owned())))
                .unwrap();

        assert!(outbox.is_empty());
    }

    #[test]
    fn corrupt_outbox_is_an_error_not_an_empty_list() {
        let corrupt = serde_json::from_str::<Vec<SubmitContactReq>>("{bad").unwrap_err();

        let result = stored_or_default::<Vec<SubmitContactReq>>(Err(StorageError::SerdeError(corrupt)));

        assert!(matches!(result, Err(StorageError::SerdeError(_))));
    }

    #[test]
    fn stored_outbox_passes_through() {
        let queued = vec![SubmitContactReq {
            name: "John Doe".to_owned(),
            email: "john@company.com".to_owned(),
            service: "Other / Custom".to_owned(),
            message: "Hello".to_owned(),
        }];

        assert_eq!(stored_or_default::<Vec<SubmitContactReq>>(Ok(queued.clone())).unwrap(), queued);
    }
}
