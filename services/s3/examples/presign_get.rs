//! Generate a presigned GET URL for a single object.
//!
//! Usage:
//!
//! ```shell
//! cargo run --example presign_get -- <bucket> <key> <access_key_id> <secret_access_key> [region]
//! curl "$(cargo run --example presign_get -- mybucket hello.txt $AK $SK)"
//! ```

use std::time::Duration;

use presign_s3::{presign_url, Credential, PresignRequest};

fn main() -> presign_core::Result<()> {
    let mut args = std::env::args().skip(1);
    let bucket = args.next().expect("missing bucket");
    let key = args.next().expect("missing key");
    let access_key_id = args.next().expect("missing access key id");
    let secret_access_key = args.next().expect("missing secret access key");

    let cred = Credential::new(&access_key_id, &secret_access_key);
    let mut req = PresignRequest::new(&bucket, &key).with_expires_in(Duration::from_secs(3600));
    if let Some(region) = args.next() {
        req = req.with_region(&region);
    }

    println!("{}", presign_url(&req, &cred)?);
    Ok(())
}
