//! Fixed demo content submitted by the binaries

use unique_client::{
    Attribute, AttributeSchema, CollectionDescriptor, Image, Royalty, TokenDescriptor,
};

/// man picture (medium size png)
pub const IMAGE_URL: &str =
    "https://real.myfilebase.com/ipfs/QmVQgYDk7655Tu2nKtbky4pcJV34Kg4NDrVW48jYJZTasC";

pub const PUBLISH_IMAGE_URL: &str =
    "https://bafkreigtgjjhukwsha4r3oxstegsozsvwbpoyqdes6bd62iptb7wz7qki4.ipfs.nftstorage.link/";

pub const DEMO_OWNER: &str = "0xB8A976Ad1d87D070b5E5806B98A768B4BB4E4847";
pub const SECOND_ROYALTY_RECIPIENT: &str = "0xcafe52dae8874E9E6d7511e05d213590E47e97B6";

pub fn dotphin_collection() -> CollectionDescriptor {
    CollectionDescriptor {
        name: "DOTphin Proofs".to_string(),
        description: "Embark on a trailblazing journey with the DOTphin Proofs collection – \
                      your gateway to evolving your DOTphin NFT."
            .to_string(),
        symbol: "DOTPP".to_string(),
        cover_image: Image {
            url: IMAGE_URL.to_string(),
        },
        potential_attributes: vec![
            AttributeSchema::with_values("element", &["air", "earth", "water"]),
            AttributeSchema::new("eventId"),
            AttributeSchema::new("eventURL"),
            AttributeSchema::new("country"),
            AttributeSchema::new("city"),
            AttributeSchema::new("virtualEvent"),
            AttributeSchema::new("startDate"),
            AttributeSchema::new("endDate"),
            AttributeSchema::new("proofOf"),
        ],
    }
}

/// One token paying 5% to `signer` and 0.99% to a second recipient
pub fn demo_token(owner: &str, image: &str, signer: &str) -> TokenDescriptor {
    TokenDescriptor {
        owner: owner.to_string(),
        name: "demo token".to_string(),
        image: image.to_string(),
        attributes: vec![Attribute {
            trait_type: "color".to_string(),
            value: "YElLLow".to_string(),
        }],
        royalties: vec![
            Royalty {
                address: signer.to_string(),
                percent: 5.0,
            },
            Royalty {
                address: SECOND_ROYALTY_RECIPIENT.to_string(),
                percent: 0.99,
            },
        ],
    }
}
